//! Layout strategies: the narrow contract a container positions children through.
//!
//! A [`Layout`] receives the container's content area and one [`LayoutItem`]
//! per child (in index order) and writes child positions back into the items.
//! Strategies hold no state across frames. [`AbsoluteLayout`] keeps explicit
//! positions; [`FlexLayout`] stacks or wraps children using taffy.

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use crate::geometry::{Rect, Size};
use crate::widget::core::Alignment;

pub mod absolute;
pub mod flex;

pub use absolute::AbsoluteLayout;
pub use flex::FlexLayout;

/// Errors raised while arranging children.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout engine failure: {0}")]
    Engine(String),
}

// ---------------------------------------------------------------------------
// LayoutKind
// ---------------------------------------------------------------------------

/// The available layout strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
    /// Children keep their explicit positions (or alignment anchors).
    #[default]
    Absolute,
    /// Children stacked top to bottom.
    Vertical,
    /// Children placed left to right.
    Horizontal,
    /// Children placed left to right, wrapping onto new rows.
    Flow,
}

impl LayoutKind {
    /// Parse `absolute`, `vertical`, `horizontal` or `flow`, case-insensitive,
    /// with an optional `LAYOUT_` prefix.
    pub fn from_name(name: &str) -> Option<LayoutKind> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.strip_prefix("layout_").unwrap_or(&lower) {
            "absolute" => Some(LayoutKind::Absolute),
            "vertical" => Some(LayoutKind::Vertical),
            "horizontal" => Some(LayoutKind::Horizontal),
            "flow" => Some(LayoutKind::Flow),
            _ => None,
        }
    }

    /// A fresh strategy instance of this kind.
    pub fn create(self) -> Rc<dyn Layout> {
        match self {
            LayoutKind::Absolute => Rc::new(AbsoluteLayout),
            kind => Rc::new(FlexLayout::new(kind)),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutKind::Absolute => "absolute",
            LayoutKind::Vertical => "vertical",
            LayoutKind::Horizontal => "horizontal",
            LayoutKind::Flow => "flow",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Layout contract
// ---------------------------------------------------------------------------

/// One child as seen by a layout strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    /// Position relative to the content origin, plus size. Strategies write
    /// the position; sizes are read-only input.
    pub bounds: Rect,
    pub alignment: Option<Alignment>,
    /// Invisible children take no space and are left where they are.
    pub visible: bool,
}

impl LayoutItem {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, alignment: None, visible: true }
    }
}

/// A positioning strategy.
pub trait Layout: fmt::Debug {
    /// Which strategy this is.
    fn kind(&self) -> LayoutKind;

    /// Position `items` inside a content area of `area` pixels.
    fn arrange(&self, area: Size, items: &mut [LayoutItem]) -> Result<(), LayoutError>;
}

/// Smallest size that contains every visible item, measured from the content origin.
pub fn content_extent(items: &[LayoutItem]) -> Size {
    items
        .iter()
        .filter(|item| item.visible)
        .fold(Size::ZERO, |acc, item| {
            Size::new(
                acc.width.max(item.bounds.right()),
                acc.height.max(item.bounds.bottom()),
            )
        })
}

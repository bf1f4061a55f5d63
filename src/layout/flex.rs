//! Flex-based strategies (vertical, horizontal, flow) backed by taffy.
//!
//! Each arrange call builds a throwaway taffy tree: one root with the
//! content-area size and one fixed-size leaf per child. Children never shrink,
//! so content taller or wider than the area overflows and becomes scrollable.

use log::error;
use taffy::prelude::*;

use super::{Layout, LayoutError, LayoutItem, LayoutKind};
use crate::geometry;
use crate::widget::core::{Alignment, HAlign, VAlign};

fn engine_error(err: impl std::fmt::Display) -> LayoutError {
    LayoutError::Engine(err.to_string())
}

/// Stacks (`Vertical`, `Horizontal`) or wraps (`Flow`) children in order.
///
/// In the stacking layouts a child's alignment positions it on the cross
/// axis. Flow ignores alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexLayout {
    kind: LayoutKind,
}

impl FlexLayout {
    /// Create a flex strategy. `Absolute` falls back to `Vertical`.
    pub fn new(kind: LayoutKind) -> Self {
        let kind = match kind {
            LayoutKind::Absolute => LayoutKind::Vertical,
            other => other,
        };
        Self { kind }
    }

    fn container_style(&self, area: geometry::Size) -> Style {
        let mut style = Style::default();
        style.display = Display::Flex;
        style.flex_direction = match self.kind {
            LayoutKind::Vertical => FlexDirection::Column,
            _ => FlexDirection::Row,
        };
        if self.kind == LayoutKind::Flow {
            style.flex_wrap = FlexWrap::Wrap;
        }
        style.align_items = Some(AlignItems::FlexStart);
        style.align_content = Some(AlignContent::FlexStart);
        style.size = taffy::geometry::Size {
            width: Dimension::from_length(area.width),
            height: Dimension::from_length(area.height),
        };
        style
    }

    fn child_style(&self, item: &LayoutItem) -> Style {
        let mut style = Style::default();
        style.flex_shrink = 0.0;
        style.size = taffy::geometry::Size {
            width: Dimension::from_length(item.bounds.width),
            height: Dimension::from_length(item.bounds.height),
        };
        if !item.visible {
            style.display = Display::None;
        }
        style.align_self = item.alignment.and_then(|a| self.cross_alignment(a));
        style
    }

    fn cross_alignment(&self, alignment: Alignment) -> Option<AlignSelf> {
        match self.kind {
            LayoutKind::Vertical => Some(match alignment.horizontal {
                HAlign::Left => AlignSelf::FlexStart,
                HAlign::Center => AlignSelf::Center,
                HAlign::Right => AlignSelf::FlexEnd,
            }),
            LayoutKind::Horizontal => Some(match alignment.vertical {
                VAlign::Top => AlignSelf::FlexStart,
                VAlign::Center => AlignSelf::Center,
                VAlign::Bottom => AlignSelf::FlexEnd,
            }),
            _ => None,
        }
    }
}

impl Layout for FlexLayout {
    fn kind(&self) -> LayoutKind {
        self.kind
    }

    fn arrange(&self, area: geometry::Size, items: &mut [LayoutItem]) -> Result<(), LayoutError> {
        let mut tree: TaffyTree<()> = TaffyTree::new();
        let mut leaves = Vec::with_capacity(items.len());
        for item in items.iter() {
            leaves.push(tree.new_leaf(self.child_style(item)).map_err(engine_error)?);
        }
        let root = tree
            .new_with_children(self.container_style(area), &leaves)
            .map_err(engine_error)?;
        tree.compute_layout(
            root,
            taffy::geometry::Size {
                width: AvailableSpace::Definite(area.width),
                height: AvailableSpace::Definite(area.height),
            },
        )
        .map_err(|err| {
            error!("{} layout failed: {err}", self.kind);
            engine_error(err)
        })?;

        for (item, leaf) in items.iter_mut().zip(&leaves) {
            if !item.visible {
                continue;
            }
            let layout = tree.layout(*leaf).map_err(engine_error)?;
            item.bounds.x = layout.location.x;
            item.bounds.y = layout.location.y;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

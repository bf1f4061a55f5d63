//! Control trait: the capability interface shared by every widget variant.
//!
//! Every widget exposes the same five capabilities (update, draw, touch, key,
//! dirty query) over a [`ControlCore`]. [`Container`](crate::widgets::Container)
//! is the variant that also owns children. The `ControlExt` trait adds
//! builder-style setters for configuring a control before it is added.

use std::any::Any;
use std::time::Duration;

use crate::event::input::{KeyEvent, TouchInput};
use crate::geometry::{Rect, Vec2};
use crate::render::DrawList;
use crate::widget::core::{Alignment, ControlCore};

// ---------------------------------------------------------------------------
// ControlKind
// ---------------------------------------------------------------------------

/// The closed set of widget variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Container,
    Label,
    Button,
    CheckBox,
}

impl ControlKind {
    /// Map a declarative block name (`container`, `label`, `button`, `checkBox`).
    pub fn from_block_name(name: &str) -> Option<ControlKind> {
        match name {
            "container" => Some(ControlKind::Container),
            "label" => Some(ControlKind::Label),
            "button" => Some(ControlKind::Button),
            "checkBox" | "checkbox" => Some(ControlKind::CheckBox),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// FrameContext
// ---------------------------------------------------------------------------

/// Per-frame input to `Control::update`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Root-space position of the parent's content origin, scroll applied.
    pub origin: Vec2,
    /// Time since the previous frame.
    pub elapsed: Duration,
}

impl FrameContext {
    /// Context for a top-level control positioned at the root origin.
    pub fn root(elapsed: Duration) -> Self {
        Self { origin: Vec2::ZERO, elapsed }
    }
}

// ---------------------------------------------------------------------------
// Control trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: containers hold children as `Box<dyn Control>`. Controls are
/// move-only; copying a subtree is not supported.
pub trait Control: Any {
    /// Which variant this is.
    fn kind(&self) -> ControlKind;

    /// Shared base-widget state.
    fn core(&self) -> &ControlCore;

    /// Mutable shared base-widget state.
    fn core_mut(&mut self) -> &mut ControlCore;

    /// Advance one frame. The default resolves absolute bounds from the
    /// parent's content origin.
    fn update(&mut self, frame: &FrameContext) {
        let absolute = self.core().bounds().translate(frame.origin);
        self.core_mut().set_absolute_bounds(absolute);
    }

    /// Record draw commands and clear the dirty flag.
    fn draw(&mut self, list: &mut DrawList);

    /// Handle a touch sample in this control's local coordinates.
    ///
    /// Returns whether the event was consumed.
    fn touch_event(&mut self, _touch: TouchInput) -> bool {
        self.core().consume_input_events()
    }

    /// Handle a key event. Only the focused control receives keys.
    fn key_event(&mut self, _event: KeyEvent) {}

    /// Whether this control needs redrawing.
    fn is_dirty(&self) -> bool {
        self.core().is_dirty()
    }

    /// Whether this control can hold keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }

    /// Whether this control or one of its descendants holds focus.
    fn contains_focus(&self) -> bool {
        self.core().has_focus()
    }

    /// Give focus to the first control in this subtree whose id is `id`,
    /// removing it from every other control in the subtree.
    ///
    /// Returns whether a matching focusable control was found.
    fn focus(&mut self, id: &str) -> bool {
        let hit = self.can_focus() && self.core().id() == Some(id);
        self.core_mut().set_focus(hit);
        hit
    }

    /// Remove focus from this subtree.
    fn clear_focus(&mut self) {
        self.core_mut().set_focus(false);
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<'a> dyn Control + 'a {
    /// Downcast to a concrete widget type.
    pub fn downcast_ref<T: Control>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably downcast to a concrete widget type.
    pub fn downcast_mut<T: Control>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// The control's id, if any.
    pub fn id(&self) -> Option<&str> {
        self.core().id()
    }
}

// ---------------------------------------------------------------------------
// ControlExt
// ---------------------------------------------------------------------------

/// Builder-style configuration for controls.
///
/// Automatically implemented for all types that implement `Control`.
pub trait ControlExt: Control {
    /// Set the id (builder).
    fn with_id(mut self, id: &str) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_id(id);
        self
    }

    /// Set the style id (builder).
    fn with_style(mut self, style: &str) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_style(style);
        self
    }

    /// Set position and size (builder).
    fn with_bounds(mut self, x: f32, y: f32, width: f32, height: f32) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_bounds(Rect::new(x, y, width, height));
        self
    }

    /// Set the size, keeping the position (builder).
    fn with_size(mut self, width: f32, height: f32) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_size(width, height);
        self
    }

    /// Set the z-index (builder).
    fn with_z_index(mut self, z_index: i32) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_z_index(z_index);
        self
    }

    /// Set the anchor alignment (builder).
    fn with_alignment(mut self, alignment: Alignment) -> Self
    where
        Self: Sized,
    {
        self.core_mut().set_alignment(Some(alignment));
        self
    }

    /// Box the control for insertion into a container.
    fn boxed(self) -> Box<dyn Control>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

// Blanket implementation: every Control gets ControlExt for free.
impl<T: Control> ControlExt for T {}

// ===========================================================================
// Tests
// ===========================================================================

//! Base widget state shared by every control.
//!
//! [`ControlCore`] carries what the toolkit's base widget provides: identity,
//! style id, bounds, alignment, z-index, interaction state, focus, and the
//! dirty flag. Setters that change anything visible mark the control dirty.

use crate::geometry::{Rect, Spacing, Vec2};
use crate::registry::RegistryId;

// ---------------------------------------------------------------------------
// ControlState
// ---------------------------------------------------------------------------

/// Interaction state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlState {
    #[default]
    Normal,
    /// Holds keyboard focus.
    Focus,
    /// Accepted a press and is tracking the contact until release.
    Active,
    Disabled,
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Horizontal anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Anchor alignment within the parent's viewport. When set, the explicit
/// position is ignored by layouts that honor alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    pub const fn new(horizontal: HAlign, vertical: VAlign) -> Self {
        Self { horizontal, vertical }
    }

    /// Parse an alignment name such as `ALIGN_TOP_LEFT`, `vcenter_hcenter`,
    /// `bottom-right` or `right`. Missing components default to top/left.
    pub fn from_name(name: &str) -> Option<Alignment> {
        let lower = name.trim().to_ascii_lowercase();
        let body = lower.strip_prefix("align_").unwrap_or(&lower);
        let mut alignment = Alignment::default();
        let mut seen = false;
        for part in body.split(['_', '-']).filter(|p| !p.is_empty()) {
            match part {
                "left" => alignment.horizontal = HAlign::Left,
                "hcenter" => alignment.horizontal = HAlign::Center,
                "right" => alignment.horizontal = HAlign::Right,
                "top" => alignment.vertical = VAlign::Top,
                "vcenter" => alignment.vertical = VAlign::Center,
                "bottom" => alignment.vertical = VAlign::Bottom,
                "center" => {
                    alignment.horizontal = HAlign::Center;
                    alignment.vertical = VAlign::Center;
                }
                _ => return None,
            }
            seen = true;
        }
        seen.then_some(alignment)
    }

    /// Position a box of `width` x `height` inside `area` according to this alignment.
    pub fn place(self, area: Rect, width: f32, height: f32) -> Vec2 {
        let x = match self.horizontal {
            HAlign::Left => area.x,
            HAlign::Center => area.x + (area.width - width) / 2.0,
            HAlign::Right => area.right() - width,
        };
        let y = match self.vertical {
            VAlign::Top => area.y,
            VAlign::Center => area.y + (area.height - height) / 2.0,
            VAlign::Bottom => area.bottom() - height,
        };
        Vec2::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// ControlCore
// ---------------------------------------------------------------------------

/// State common to all controls.
#[derive(Debug, Clone)]
pub struct ControlCore {
    id: Option<String>,
    style: Option<String>,
    /// Position relative to the parent's content origin, plus size.
    bounds: Rect,
    /// Bounds in root coordinates, recomputed on every update.
    absolute_bounds: Rect,
    alignment: Option<Alignment>,
    auto_width: bool,
    auto_height: bool,
    padding: Spacing,
    z_index: i32,
    state: ControlState,
    enabled: bool,
    visible: bool,
    focused: bool,
    consume_input_events: bool,
    dirty: bool,
    pub(crate) owner: Option<RegistryId>,
}

impl Default for ControlCore {
    fn default() -> Self {
        Self {
            id: None,
            style: None,
            bounds: Rect::EMPTY,
            absolute_bounds: Rect::EMPTY,
            alignment: None,
            auto_width: false,
            auto_height: false,
            padding: Spacing::ZERO,
            z_index: 0,
            state: ControlState::Normal,
            enabled: true,
            visible: true,
            focused: false,
            consume_input_events: false,
            dirty: true,
            owner: None,
        }
    }
}

impl ControlCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = Some(style.into());
        self.dirty = true;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.set_bounds(Rect { x, y, ..self.bounds });
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.set_bounds(Rect { width, height, ..self.bounds });
    }

    pub fn absolute_bounds(&self) -> Rect {
        self.absolute_bounds
    }

    pub(crate) fn set_absolute_bounds(&mut self, bounds: Rect) {
        self.absolute_bounds = bounds;
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Option<Alignment>) {
        self.alignment = alignment;
        self.dirty = true;
    }

    pub fn auto_width(&self) -> bool {
        self.auto_width
    }

    pub fn set_auto_width(&mut self, auto: bool) {
        self.auto_width = auto;
        self.dirty = true;
    }

    pub fn auto_height(&self) -> bool {
        self.auto_height
    }

    pub fn set_auto_height(&mut self, auto: bool) {
        self.auto_height = auto;
        self.dirty = true;
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Spacing) {
        self.padding = padding;
        self.dirty = true;
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        if self.z_index != z_index {
            self.z_index = z_index;
            self.dirty = true;
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn set_state(&mut self, state: ControlState) {
        if self.state != state {
            self.state = state;
            self.dirty = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control. A disabled control ignores input.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.state = if enabled { ControlState::Normal } else { ControlState::Disabled };
            self.dirty = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.dirty = true;
        }
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.dirty = true;
        }
    }

    pub fn consume_input_events(&self) -> bool {
        self.consume_input_events
    }

    pub fn set_consume_input_events(&mut self, consume: bool) {
        self.consume_input_events = consume;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Whether this control currently belongs to a child registry.
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let core = ControlCore::new();
        assert!(core.id().is_none());
        assert!(core.is_enabled());
        assert!(core.is_visible());
        assert!(!core.has_focus());
        assert!(core.is_dirty());
        assert!(!core.is_owned());
        assert_eq!(core.state(), ControlState::Normal);
        assert_eq!(core.z_index(), 0);
    }

    #[test]
    fn setters_mark_dirty() {
        let mut core = ControlCore::new();
        core.clear_dirty();
        core.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(core.is_dirty());

        core.clear_dirty();
        core.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(!core.is_dirty(), "unchanged bounds leave the flag alone");

        core.set_z_index(3);
        assert!(core.is_dirty());
    }

    #[test]
    fn disabling_sets_state() {
        let mut core = ControlCore::new();
        core.set_enabled(false);
        assert_eq!(core.state(), ControlState::Disabled);
        core.set_enabled(true);
        assert_eq!(core.state(), ControlState::Normal);
    }

    #[test]
    fn alignment_names() {
        assert_eq!(
            Alignment::from_name("ALIGN_TOP_LEFT"),
            Some(Alignment::new(HAlign::Left, VAlign::Top))
        );
        assert_eq!(
            Alignment::from_name("ALIGN_VCENTER_HCENTER"),
            Some(Alignment::new(HAlign::Center, VAlign::Center))
        );
        assert_eq!(
            Alignment::from_name("bottom-right"),
            Some(Alignment::new(HAlign::Right, VAlign::Bottom))
        );
        assert_eq!(
            Alignment::from_name("ALIGN_RIGHT"),
            Some(Alignment::new(HAlign::Right, VAlign::Top))
        );
        assert_eq!(Alignment::from_name("ALIGN_SIDEWAYS"), None);
        assert_eq!(Alignment::from_name(""), None);
    }

    #[test]
    fn alignment_place() {
        let area = Rect::new(0.0, 0.0, 100.0, 50.0);
        let centered = Alignment::new(HAlign::Center, VAlign::Center).place(area, 20.0, 10.0);
        assert_eq!(centered, Vec2::new(40.0, 20.0));
        let corner = Alignment::new(HAlign::Right, VAlign::Bottom).place(area, 20.0, 10.0);
        assert_eq!(corner, Vec2::new(80.0, 40.0));
    }
}

//! Button widget: an interactive, focusable button.
//!
//! A press inside the button captures the contact (`Active` state); the
//! release counts as a click only if it lands back inside. A focused button
//! also clicks on Enter or Space.

use std::any::Any;

use crate::event::input::{Key, KeyAction, KeyEvent, TouchEvent, TouchInput};
use crate::render::{DrawCommand, DrawList};
use crate::widget::core::{ControlCore, ControlState};
use crate::widget::traits::{Control, ControlKind};

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// An interactive button with a text label.
///
/// # Examples
///
/// ```ignore
/// let ok = Button::new("OK").with_id("ok").with_size(80.0, 32.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Button {
    core: ControlCore,
    text: String,
    clicks: u32,
}

impl Button {
    /// Create a new button with the given label text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            core: ControlCore::new(),
            text: text.into(),
            clicks: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.core.mark_dirty();
    }

    /// Number of clicks since creation.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Register a click.
    pub fn click(&mut self) {
        self.clicks += 1;
        self.core.mark_dirty();
    }
}

impl Control for Button {
    fn kind(&self) -> ControlKind {
        ControlKind::Button
    }

    fn core(&self) -> &ControlCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ControlCore {
        &mut self.core
    }

    fn draw(&mut self, list: &mut DrawList) {
        if self.core.is_visible() {
            let bounds = self.core.absolute_bounds();
            list.push(DrawCommand::Background {
                bounds,
                style: self.core.style().map(str::to_string),
            });
            list.push(DrawCommand::Text {
                bounds,
                text: self.text.clone(),
            });
        }
        self.core.clear_dirty();
    }

    fn touch_event(&mut self, touch: TouchInput) -> bool {
        if !self.core.is_enabled() {
            return false;
        }
        let inside = self.core.bounds().size().to_rect().contains(touch.x, touch.y);
        let active = self.core.state() == ControlState::Active;
        match touch.event {
            TouchEvent::Press if inside => {
                self.core.set_state(ControlState::Active);
                true
            }
            TouchEvent::Move if active => true,
            TouchEvent::Release if active => {
                self.core.set_state(ControlState::Normal);
                if inside {
                    self.click();
                }
                true
            }
            _ => self.core.consume_input_events(),
        }
    }

    fn key_event(&mut self, event: KeyEvent) {
        if event.action == KeyAction::Press
            && matches!(event.code, Key::Enter | Key::Char(' '))
            && self.core.is_enabled()
        {
            self.click();
        }
    }

    fn can_focus(&self) -> bool {
        self.core.is_enabled()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

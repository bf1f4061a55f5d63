//! CheckBox widget: a button that toggles a checked flag on every click.

use std::any::Any;

use super::button::Button;
use crate::event::input::{KeyEvent, TouchInput};
use crate::render::{DrawCommand, DrawList};
use crate::widget::core::ControlCore;
use crate::widget::traits::{Control, ControlKind};

#[derive(Debug, Clone, Default)]
pub struct CheckBox {
    button: Button,
    checked: bool,
}

impl CheckBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            button: Button::new(text),
            checked: false,
        }
    }

    /// Set the initial checked state (builder).
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.checked != checked {
            self.checked = checked;
            self.button.core_mut().mark_dirty();
        }
    }

    pub fn text(&self) -> &str {
        self.button.text()
    }

    /// Run `f` on the inner button, toggling once per click it registers.
    fn with_clicks<R>(&mut self, f: impl FnOnce(&mut Button) -> R) -> R {
        let before = self.button.clicks();
        let result = f(&mut self.button);
        if (self.button.clicks() - before) % 2 == 1 {
            self.set_checked(!self.checked);
        }
        result
    }
}

impl Control for CheckBox {
    fn kind(&self) -> ControlKind {
        ControlKind::CheckBox
    }

    fn core(&self) -> &ControlCore {
        self.button.core()
    }

    fn core_mut(&mut self) -> &mut ControlCore {
        self.button.core_mut()
    }

    fn draw(&mut self, list: &mut DrawList) {
        let core = self.button.core();
        if core.is_visible() {
            let bounds = core.absolute_bounds();
            let mark = if self.checked { "[x]" } else { "[ ]" };
            list.push(DrawCommand::Background {
                bounds,
                style: core.style().map(str::to_string),
            });
            list.push(DrawCommand::Text {
                bounds,
                text: format!("{mark} {}", self.button.text()),
            });
        }
        self.button.core_mut().clear_dirty();
    }

    fn touch_event(&mut self, touch: TouchInput) -> bool {
        self.with_clicks(|button| button.touch_event(touch))
    }

    fn key_event(&mut self, event: KeyEvent) {
        self.with_clicks(|button| button.key_event(event));
    }

    fn can_focus(&self) -> bool {
        self.button.can_focus()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

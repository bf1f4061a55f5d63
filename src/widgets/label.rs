//! Label widget: displays static text.

use std::any::Any;

use crate::render::{DrawCommand, DrawList};
use crate::widget::core::ControlCore;
use crate::widget::traits::{Control, ControlKind};

/// A non-interactive text display.
///
/// # Examples
///
/// ```ignore
/// let title = Label::new("Settings").with_bounds(0.0, 0.0, 200.0, 24.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Label {
    core: ControlCore,
    text: String,
}

impl Label {
    /// Create a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            core: ControlCore::new(),
            text: text.into(),
        }
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and mark the label dirty.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.core.mark_dirty();
    }
}

impl Control for Label {
    fn kind(&self) -> ControlKind {
        ControlKind::Label
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

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

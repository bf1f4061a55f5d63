//! DrawList: the display list controls append to while drawing.
//!
//! Controls never rasterize. `draw` records [`DrawCommand`]s in back-to-front
//! order; the sprite/batch backend that turns them into pixels lives outside
//! this crate.

use crate::geometry::Rect;
use crate::widget::scroll::Axis;

/// A single drawing instruction, in root coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill a control's background using its style id.
    Background { bounds: Rect, style: Option<String> },
    /// Draw text inside `bounds`.
    Text { bounds: Rect, text: String },
    /// Restrict subsequent commands to the intersection with `clip`.
    PushClip(Rect),
    /// Undo the most recent `PushClip`.
    PopClip,
    /// A scrollbar thumb.
    ScrollBar { axis: Axis, bounds: Rect, opacity: f32 },
}

/// An ordered list of draw commands with a clip stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    clips: Vec<Rect>,
}

impl DrawList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Push a clip rectangle, intersected with the current clip.
    pub fn push_clip(&mut self, clip: Rect) {
        let effective = match self.clips.last() {
            Some(current) => current.intersection(clip),
            None => clip,
        };
        self.clips.push(effective);
        self.commands.push(DrawCommand::PushClip(effective));
    }

    /// Pop the most recent clip rectangle.
    pub fn pop_clip(&mut self) {
        if self.clips.pop().is_some() {
            self.commands.push(DrawCommand::PopClip);
        }
    }

    /// The active clip, if any.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }

    /// The recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Remove all commands and clips.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clips.clear();
    }
}

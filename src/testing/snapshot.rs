//! Snapshot helpers.
//!
//! [`describe`] turns a [`DrawList`] into stable, line-per-command text that
//! reads well in `insta` snapshots and assertion diffs. Commands inside a
//! clip are indented one level per active clip.

use std::fmt::Write;

use crate::geometry::Rect;
use crate::render::{DrawCommand, DrawList};
use crate::widget::scroll::Axis;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render `list` as text, one command per line, without a trailing newline.
///
/// # Examples
///
/// ```ignore
/// let text = formkit::testing::describe(&pilot.draw());
/// insta::assert_snapshot!(text);
/// ```
pub fn describe(list: &DrawList) -> String {
    let mut out = String::new();
    let mut depth = 0usize;
    for command in list.commands() {
        if matches!(command, DrawCommand::PopClip) {
            depth = depth.saturating_sub(1);
        }
        if !out.is_empty() {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = match command {
            DrawCommand::Background { bounds, style: Some(style) } => {
                write!(out, "bg {} [{style}]", rect(*bounds))
            }
            DrawCommand::Background { bounds, style: None } => write!(out, "bg {}", rect(*bounds)),
            DrawCommand::Text { bounds, text } => write!(out, "text {} {text:?}", rect(*bounds)),
            DrawCommand::PushClip(clip) => write!(out, "clip {}", rect(*clip)),
            DrawCommand::PopClip => write!(out, "end clip"),
            DrawCommand::ScrollBar { axis, bounds, opacity } => {
                let axis = match axis {
                    Axis::Horizontal => "horizontal",
                    Axis::Vertical => "vertical",
                };
                write!(out, "scrollbar {axis} {} opacity {opacity:.2}", rect(*bounds))
            }
        };
        if matches!(command, DrawCommand::PushClip(_)) {
            depth += 1;
        }
    }
    out
}

fn rect(r: Rect) -> String {
    format!("{},{} {}x{}", r.x, r.y, r.width, r.height)
}

// ===========================================================================
// Tests
// ===========================================================================

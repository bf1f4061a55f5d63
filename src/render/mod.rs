//! Rendering output: the display list produced by `Control::draw`.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

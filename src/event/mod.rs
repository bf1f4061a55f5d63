//! Event system: input types, platform conversion, routing.

pub mod input;
pub mod router;

pub use input::{InputEvent, Key, KeyAction, KeyEvent, Modifiers, TouchEvent, TouchInput};
pub use router::EventRouter;

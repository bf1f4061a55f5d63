//! Widget system: base state, the control trait, kinetic scrolling.

pub mod core;
pub mod scroll;
pub mod traits;

pub use self::core::{Alignment, ControlCore, ControlState, HAlign, VAlign};
pub use scroll::{
    Axis, Scroll, ScrollConfig, ScrollDirection, ScrollEngine, ScrollPhase, ScrollbarThumb,
};
pub use traits::{Control, ControlExt, ControlKind, FrameContext};

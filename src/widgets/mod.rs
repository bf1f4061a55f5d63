//! Built-in widgets: Container, Label, Button, CheckBox, plus declarative
//! construction.

pub mod builder;
pub mod button;
pub mod check_box;
pub mod container;
pub mod label;

pub use builder::build_control;
pub use button::Button;
pub use check_box::CheckBox;
pub use container::Container;
pub use label::Label;

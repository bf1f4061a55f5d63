//! # formkit
//!
//! A frame-driven widget core for real-time UIs: containers that own child
//! controls, arrange them through pluggable layouts, and scroll them with
//! touch-driven kinetic physics.
//!
//! Everything is synchronous and single-threaded. The host application calls
//! `update` once per frame with the elapsed time, feeds platform input through
//! [`Container::handle_input`](widgets::Container::handle_input), and renders
//! the [`DrawList`](render::DrawList) that `draw` produces.
//!
//! ## Core Systems
//!
//! - **[`registry`]** - Slotmap-backed child ownership with stable z-ordering
//! - **[`widget`]** - Control trait, base widget state, kinetic scroll engine
//! - **[`widgets`]** - Built-in widgets: Container, Label, Button, CheckBox
//! - **[`event`]** - Touch and key input, z-ordered routing, crossterm bridge
//! - **[`layout`]** - Absolute placement and taffy-powered flex strategies
//! - **[`animation`]** - Clips and animatable properties (scrollbar fade)
//! - **[`properties`]** - Declarative `name id { key = value }` documents
//! - **[`render`]** - Display list produced by `draw`
//! - **[`testing`]** - Headless Pilot and snapshot helpers
//! - **[`geometry`]** - Vec2, Size, Rect, Spacing primitives

// Foundation
pub mod geometry;

// Core systems
pub mod animation;
pub mod layout;
pub mod properties;
pub mod registry;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Testing
pub mod testing;

pub use properties::{ParseError, Properties};
pub use registry::{ChildKey, ChildRegistry, RegistryError};
pub use widget::{Control, ControlExt, Scroll, ScrollConfig};
pub use widgets::{Button, CheckBox, Container, Label};

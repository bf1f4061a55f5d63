//! Headless testing helpers: Pilot, snapshot text.
//!
//! Use the [`Pilot`] to drive a [`Container`](crate::widgets::Container)
//! frame by frame with synthetic touch and key input. Use [`describe`] to
//! capture a draw list as plain text for snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::describe;

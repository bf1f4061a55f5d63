//! Event routing across a container's children.
//!
//! [`EventRouter`] offers touch samples to children top-most first and falls
//! back to the container's [`ScrollEngine`] when no child consumes them. Keys
//! go to the single focused descendant. Dirty state is aggregated fresh on
//! every query.

use log::trace;

use super::input::{KeyEvent, TouchEvent, TouchInput};
use crate::geometry::Vec2;
use crate::registry::{ChildKey, ChildRegistry};
use crate::widget::core::ControlState;
use crate::widget::scroll::ScrollEngine;

// ---------------------------------------------------------------------------
// EventRouter
// ---------------------------------------------------------------------------

/// Dispatches input to children in z-order.
///
/// The hit order is snapshotted before every dispatch, so a child handler
/// can never observe a half-iterated child list.
#[derive(Debug, Default)]
pub struct EventRouter {
    hit_order: Vec<ChildKey>,
}

impl EventRouter {
    /// Create a router with an empty hit-order buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `touch` (container-local pixels) to the children, then to `engine`.
    ///
    /// A press reaches a child only if it lands inside the engine's viewport
    /// and inside the child's bounds. Move and release reach children that
    /// captured the contact with an earlier press (`Active` state). The first
    /// child to consume stops dispatch. Returns whether anything consumed.
    pub fn dispatch_touch(
        &mut self,
        children: &mut ChildRegistry,
        engine: &mut ScrollEngine,
        touch: TouchInput,
    ) -> bool {
        let viewport = engine.viewport();
        let inside = viewport.contains(touch.x, touch.y);
        let content_origin = viewport.origin() - engine.offset();
        let content = Vec2::new(touch.x, touch.y) - content_origin;

        children.z_ordered_keys_into(&mut self.hit_order);
        for key in &self.hit_order {
            let Some(child) = children.by_key_mut(*key) else {
                continue;
            };
            let core = child.core();
            if !core.is_enabled() || !core.is_visible() {
                continue;
            }
            let bounds = core.bounds();
            let deliver = match touch.event {
                TouchEvent::Press => inside && bounds.contains(content.x, content.y),
                TouchEvent::Move | TouchEvent::Release => core.state() == ControlState::Active,
            };
            if !deliver {
                continue;
            }
            let local = TouchInput {
                x: content.x - bounds.x,
                y: content.y - bounds.y,
                ..touch
            };
            if child.touch_event(local) {
                trace!(
                    "touch {:?} consumed by child {:?}",
                    touch.event,
                    child.core().id()
                );
                return true;
            }
        }

        let consumed = engine.apply_touch(touch);
        if consumed {
            trace!("touch {:?} consumed by scroll engine", touch.event);
        }
        consumed
    }

    /// Deliver `event` to the one child that holds or contains focus.
    ///
    /// Nothing happens if no child does.
    pub fn dispatch_key(&self, children: &mut ChildRegistry, event: KeyEvent) {
        for index in 0..children.len() {
            let Ok(child) = children.get_mut(index) else {
                break;
            };
            if child.contains_focus() {
                child.key_event(event);
                return;
            }
        }
    }

    /// `own` OR any child dirty. Never cached.
    pub fn is_dirty(own: bool, children: &ChildRegistry) -> bool {
        own || children.iter().any(|child| child.is_dirty())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

//! Pilot: drive a headless [`Container`] frame by frame.
//!
//! The `Pilot` owns a root container and a fixed frame step. Touch helpers
//! take root-space pixel coordinates and go through
//! [`Container::handle_input`], exactly as platform input would. Time only
//! moves when a frame runs, so gestures are reproducible.

use std::time::Duration;

use crate::event::input::{InputEvent, Key, KeyEvent, TouchEvent, TouchInput};
use crate::geometry::Vec2;
use crate::render::DrawList;
use crate::widget::traits::{Control, FrameContext};
use crate::widgets::Container;

/// Default frame step, roughly 60 frames per second.
pub const DEFAULT_STEP: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless frame driver for testing containers.
///
/// # Examples
///
/// ```ignore
/// use formkit::testing::Pilot;
///
/// let mut pilot = Pilot::new(list);
/// pilot.drag((50.0, 150.0), (50.0, 50.0), Duration::from_millis(100), 5);
/// pilot.settle(200);
/// assert!(pilot.container().scroll_offset().y > 100.0);
/// ```
pub struct Pilot {
    container: Container,
    step: Duration,
}

impl Pilot {
    /// Wrap `container` and run one zero-length frame so it is laid out.
    pub fn new(container: Container) -> Self {
        let mut pilot = Self {
            container,
            step: DEFAULT_STEP,
        };
        pilot.run_frame(Duration::ZERO);
        pilot
    }

    /// Use a different frame step (builder).
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    /// Give the container back.
    pub fn into_inner(self) -> Container {
        self.container
    }

    // ── Input ────────────────────────────────────────────────────────

    fn touch(&mut self, event: TouchEvent, x: f32, y: f32) -> bool {
        self.container
            .handle_input(InputEvent::Touch(TouchInput::primary(event, x, y)))
    }

    /// Press contact 0 at root-space `(x, y)`. Returns whether it was consumed.
    pub fn press(&mut self, x: f32, y: f32) -> bool {
        self.touch(TouchEvent::Press, x, y)
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.touch(TouchEvent::Move, x, y)
    }

    pub fn release(&mut self, x: f32, y: f32) -> bool {
        self.touch(TouchEvent::Release, x, y)
    }

    /// Press and release at the same point.
    pub fn tap(&mut self, x: f32, y: f32) -> bool {
        let pressed = self.press(x, y);
        let released = self.release(x, y);
        pressed || released
    }

    /// Press at `from`, then move in a straight line to `to` over `duration`,
    /// one frame and one move sample per step, and release at `to`.
    ///
    /// The release lands on the same frame as the last move, so the gesture
    /// coasts with the average drag speed.
    pub fn drag(&mut self, from: (f32, f32), to: (f32, f32), duration: Duration, steps: u32) {
        let from = Vec2::new(from.0, from.1);
        let to = Vec2::new(to.0, to.1);
        let steps = steps.max(1);
        let dt = duration / steps;

        self.press(from.x, from.y);
        for i in 1..=steps {
            self.run_frame(dt);
            let p = from.blend(to, i as f32 / steps as f32);
            self.move_to(p.x, p.y);
        }
        self.release(to.x, to.y);
    }

    /// Send a key press to the focused control.
    pub fn key(&mut self, code: Key) -> bool {
        self.container
            .handle_input(InputEvent::Key(KeyEvent::press(code)))
    }

    // ── Frames ───────────────────────────────────────────────────────

    fn run_frame(&mut self, dt: Duration) {
        self.container.update(&FrameContext::root(dt));
    }

    /// Run one frame of the configured step.
    pub fn frame(&mut self) {
        self.run_frame(self.step);
    }

    /// Run frames until `duration` has elapsed. The last frame may be short.
    pub fn advance(&mut self, duration: Duration) {
        let mut remaining = duration;
        while !remaining.is_zero() {
            let dt = remaining.min(self.step);
            self.run_frame(dt);
            remaining -= dt;
        }
    }

    /// Run frames until scrolling comes to rest, at most `max_frames`.
    /// Returns the number of frames run.
    pub fn settle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && !self.container.scroll_engine().is_idle() {
            self.frame();
            frames += 1;
        }
        frames
    }

    /// Draw the container into a fresh display list.
    pub fn draw(&mut self) -> DrawList {
        let mut list = DrawList::new();
        self.container.draw(&mut list);
        list
    }
}

// ===========================================================================
// Tests
// ===========================================================================

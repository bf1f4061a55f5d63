//! Kinetic scrolling: touch-driven drag, inertial coast, scrollbar auto-hide.
//!
//! [`ScrollEngine`] owns the scroll offset and velocity of one container. Touch
//! samples arrive in container-local pixels through [`ScrollEngine::apply_touch`];
//! time advances only through [`ScrollEngine::tick`]. Each axis runs its own
//! state machine (`Idle` -> `Dragging` -> `Coasting` -> `Idle`), so a diagonal
//! drag decelerates independently on both axes.
//!
//! The offset is positive in content space: dragging the pointer up by `d`
//! scrolls the content up and increases the vertical offset by `d`. It is
//! always clamped to `[0, content - viewport]` on enabled axes and pinned at
//! zero on disabled ones. Hitting a bound stops that axis dead.
//!
//! `ScrollbarThumb` carries the data needed to draw a scrollbar indicator.

use std::time::Duration;

use bitflags::bitflags;
use log::debug;

use crate::animation::{lerp, AnimatableProperty, AnimationClip, AnimationTarget, Curve};
use crate::event::input::{TouchEvent, TouchInput};
use crate::geometry::{Rect, Size, Vec2};

/// Id of the scrollbar fade-out animation clip.
pub const FADE_CLIP_ID: &str = "scrollbar-fade-out";

/// Thickness of a scrollbar thumb in pixels.
pub const SCROLLBAR_THICKNESS: f32 = 4.0;

/// Smallest friction coefficient accepted by [`ScrollConfig`].
pub const MIN_FRICTION: f32 = 1e-3;

// ---------------------------------------------------------------------------
// Scroll permissions
// ---------------------------------------------------------------------------

bitflags! {
    /// Which axes a container may scroll along.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Scroll: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL = 0b10;
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Scroll {
    /// No scrolling.
    pub const NONE: Scroll = Scroll::empty();

    /// Parse `none`, `horizontal`, `vertical` or `both`, case-insensitive,
    /// with an optional `SCROLL_` prefix.
    pub fn parse(name: &str) -> Option<Scroll> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.strip_prefix("scroll_").unwrap_or(&lower) {
            "none" => Some(Scroll::NONE),
            "horizontal" => Some(Scroll::HORIZONTAL),
            "vertical" => Some(Scroll::VERTICAL),
            "both" => Some(Scroll::BOTH),
            _ => None,
        }
    }

    /// Whether scrolling along `axis` is permitted.
    pub fn allows(self, axis: Axis) -> bool {
        self.contains(axis.flag())
    }
}

/// A scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    fn flag(self) -> Scroll {
        match self {
            Axis::Horizontal => Scroll::HORIZONTAL,
            Axis::Vertical => Scroll::VERTICAL,
        }
    }

    fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }

    /// The component of `v` along this axis.
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    fn extent(self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    fn set(self, v: &mut Vec2, value: f32) {
        match self {
            Axis::Horizontal => v.x = value,
            Axis::Vertical => v.y = value,
        }
    }
}

/// Which way an axis was last scrolled. Presentation hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Offset increasing (content moving up or left).
    Forward,
    /// Offset decreasing.
    Backward,
}

/// Per-axis state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollPhase {
    Idle,
    Dragging,
    Coasting,
}

// ---------------------------------------------------------------------------
// ScrollConfig
// ---------------------------------------------------------------------------

/// Tuning constants for kinetic scrolling.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    /// Friction coefficient. Higher values stop the coast sooner.
    pub friction: f32,
    /// Multiplier applied to `friction` per second of coast.
    pub friction_scale: f32,
    /// Release velocity cap, in px/s.
    pub max_velocity: f32,
    /// Coast stops once an axis drops below this speed, in px/s.
    pub stop_velocity: f32,
    /// Holding still this long before release coasts with zero velocity.
    pub inertia_delay: Duration,
    /// Idle time before auto-hidden scrollbars start to fade.
    pub fade_delay: Duration,
    /// Length of the scrollbar fade.
    pub fade_duration: Duration,
    pub fade_curve: Curve,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            friction: 1.0,
            friction_scale: 5.0,
            max_velocity: 5000.0,
            stop_velocity: 100.0,
            inertia_delay: Duration::from_millis(100),
            fade_delay: Duration::from_millis(500),
            fade_duration: Duration::from_millis(500),
            fade_curve: Curve::QuadraticInOut,
        }
    }
}

impl ScrollConfig {
    /// Create a config with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the friction coefficient (builder). Clamped to [`MIN_FRICTION`].
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(MIN_FRICTION);
        self
    }

    /// Set the release velocity cap (builder).
    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity.abs();
        self
    }

    /// Set the stop threshold (builder).
    pub fn with_stop_velocity(mut self, stop_velocity: f32) -> Self {
        self.stop_velocity = stop_velocity.abs();
        self
    }

    /// Set the inertia delay (builder).
    pub fn with_inertia_delay(mut self, delay: Duration) -> Self {
        self.inertia_delay = delay;
        self
    }

    /// Set the idle delay before fading (builder).
    pub fn with_fade_delay(mut self, delay: Duration) -> Self {
        self.fade_delay = delay;
        self
    }

    /// Set the fade length (builder).
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Multiplicative velocity decay for a tick of `dt` seconds, in `[0, 1]`.
    pub fn friction_factor(&self, dt: f32) -> f32 {
        let friction = self.friction.max(MIN_FRICTION);
        (1.0 - friction * self.friction_scale * dt).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// ScrollbarThumb
// ---------------------------------------------------------------------------

/// Geometry of one scrollbar thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarThumb {
    pub axis: Axis,
    /// Thumb position along the track, `0.0` (start) to `1.0` (end).
    pub position: f32,
    /// Thumb length as a fraction of the track (viewport / content).
    pub size: f32,
    /// Thumb rectangle in the same local space as the viewport.
    pub bounds: Rect,
}

// ---------------------------------------------------------------------------
// ScrollEngine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct AxisGesture {
    dragging: bool,
    start_time: Duration,
    start_pos: f32,
    last_time: Duration,
    last_pos: f32,
    direction: Option<ScrollDirection>,
}

/// Scroll position, velocity and scrollbar visibility for one container.
#[derive(Debug, Clone)]
pub struct ScrollEngine {
    config: ScrollConfig,
    scroll: Scroll,
    auto_hide: bool,
    viewport: Rect,
    content: Size,
    offset: Vec2,
    velocity: Vec2,
    gestures: [AxisGesture; 2],
    clock: Duration,
    idle: Duration,
    opacity: f32,
    fade: AnimationClip,
    dirty: bool,
}

impl Default for ScrollEngine {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollEngine {
    /// Create an engine with no scroll permission and auto-hide enabled.
    pub fn new(config: ScrollConfig) -> Self {
        let fade = AnimationClip::new(
            FADE_CLIP_ID,
            AnimatableProperty::ScrollbarOpacity,
            1.0,
            0.0,
            config.fade_duration,
            config.fade_curve,
        );
        Self {
            config,
            scroll: Scroll::NONE,
            auto_hide: true,
            viewport: Rect::EMPTY,
            content: Size::ZERO,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            gestures: [AxisGesture::default(); 2],
            clock: Duration::ZERO,
            idle: Duration::ZERO,
            opacity: 1.0,
            fade,
            dirty: true,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Permissions and extents
    // -----------------------------------------------------------------------

    pub fn scroll(&self) -> Scroll {
        self.scroll
    }

    /// Change scroll permission. Revoking an axis mid-drag cancels that
    /// axis's gesture and zeroes its velocity.
    pub fn set_scroll(&mut self, scroll: Scroll) {
        if self.scroll == scroll {
            return;
        }
        for axis in Axis::ALL {
            if self.scroll.allows(axis) && !scroll.allows(axis) {
                if self.gestures[axis.index()].dragging {
                    debug!("scroll permission revoked mid-drag on {axis:?}");
                }
                self.gestures[axis.index()] = AxisGesture::default();
                axis.set(&mut self.velocity, 0.0);
            }
        }
        self.scroll = scroll;
        self.clamp_offset();
        self.dirty = true;
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    /// Enable or disable scrollbar auto-hide. Disabling it stops any fade and
    /// makes the scrollbars permanently visible.
    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        if self.auto_hide == auto_hide {
            return;
        }
        self.auto_hide = auto_hide;
        self.fade.stop();
        self.opacity = 1.0;
        self.idle = Duration::ZERO;
        self.dirty = true;
    }

    /// The scrollable viewport, in container-local pixels.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.clamp_offset();
            self.dirty = true;
        }
    }

    /// Extent of the scrolled content.
    pub fn content_size(&self) -> Size {
        self.content
    }

    pub fn set_content_size(&mut self, content: Size) {
        if self.content != content {
            self.content = content;
            self.clamp_offset();
            self.dirty = true;
        }
    }

    // -----------------------------------------------------------------------
    // Position and motion
    // -----------------------------------------------------------------------

    /// Current scroll offset.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Jump to `offset`, clamped to the valid range. Stops any coast.
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.offset = offset;
        self.velocity = Vec2::ZERO;
        self.clamp_offset();
        self.dirty = true;
    }

    /// Current coast velocity in offset space, px/s.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Largest reachable offset per axis; zero on disabled axes.
    pub fn max_offset(&self) -> Vec2 {
        let mut max = Vec2::ZERO;
        for axis in Axis::ALL {
            if self.scroll.allows(axis) {
                let room = axis.extent(self.content) - axis.extent(self.viewport.size());
                axis.set(&mut max, room.max(0.0));
            }
        }
        max
    }

    /// The state-machine phase of `axis`.
    pub fn phase(&self, axis: Axis) -> ScrollPhase {
        if self.gestures[axis.index()].dragging {
            ScrollPhase::Dragging
        } else if axis.of(self.velocity) != 0.0 {
            ScrollPhase::Coasting
        } else {
            ScrollPhase::Idle
        }
    }

    /// Whether a drag is in progress on any axis.
    pub fn is_dragging(&self) -> bool {
        self.gestures.iter().any(|g| g.dragging)
    }

    /// Whether both axes are idle.
    pub fn is_idle(&self) -> bool {
        Axis::ALL.iter().all(|a| self.phase(*a) == ScrollPhase::Idle)
    }

    /// Direction `axis` last moved in during the current or latest gesture.
    pub fn direction(&self, axis: Axis) -> Option<ScrollDirection> {
        self.gestures[axis.index()].direction
    }

    /// Engine time: the sum of all ticks so far.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    // -----------------------------------------------------------------------
    // Scrollbars
    // -----------------------------------------------------------------------

    /// Scrollbar opacity in `[0, 1]`. Always `1.0` when auto-hide is off.
    pub fn scrollbar_opacity(&self) -> f32 {
        if self.auto_hide {
            self.opacity
        } else {
            1.0
        }
    }

    /// The fade-out animation handle.
    pub fn fade_clip(&self) -> &AnimationClip {
        &self.fade
    }

    /// Thumb geometry for `axis`, or `None` if the axis is disabled or the
    /// content fits the viewport.
    pub fn thumb(&self, axis: Axis) -> Option<ScrollbarThumb> {
        if !self.scroll.allows(axis) {
            return None;
        }
        let content = axis.extent(self.content);
        let viewport = axis.extent(self.viewport.size());
        if content <= viewport || viewport <= 0.0 {
            return None;
        }
        let size = (viewport / content).clamp(0.0, 1.0);
        let max = content - viewport;
        let position = (axis.of(self.offset) / max).clamp(0.0, 1.0);
        let length = viewport * size;
        let start = (viewport - length) * position;
        let v = self.viewport;
        let bounds = match axis {
            Axis::Vertical => Rect::new(
                v.right() - SCROLLBAR_THICKNESS,
                v.y + start,
                SCROLLBAR_THICKNESS,
                length,
            ),
            Axis::Horizontal => Rect::new(
                v.x + start,
                v.bottom() - SCROLLBAR_THICKNESS,
                length,
                SCROLLBAR_THICKNESS,
            ),
        };
        Some(ScrollbarThumb { axis, position, size, bounds })
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Feed a touch sample in container-local pixels.
    ///
    /// Returns whether the engine consumed it. Only contact `0` scrolls.
    pub fn apply_touch(&mut self, touch: TouchInput) -> bool {
        if touch.contact != 0 {
            return false;
        }
        let pos = Vec2::new(touch.x, touch.y);
        match touch.event {
            TouchEvent::Press => self.press(pos),
            TouchEvent::Move => self.drag(pos),
            TouchEvent::Release => self.release(pos),
        }
    }

    fn press(&mut self, pos: Vec2) -> bool {
        if self.scroll.is_empty() || !self.viewport.contains(pos.x, pos.y) {
            return false;
        }
        self.velocity = Vec2::ZERO;
        for axis in Axis::ALL {
            self.gestures[axis.index()] = if self.scroll.allows(axis) {
                AxisGesture {
                    dragging: true,
                    start_time: self.clock,
                    start_pos: axis.of(pos),
                    last_time: self.clock,
                    last_pos: axis.of(pos),
                    direction: None,
                }
            } else {
                AxisGesture::default()
            };
        }
        self.show_scrollbars();
        debug!("scroll drag start at ({}, {})", pos.x, pos.y);
        true
    }

    fn drag(&mut self, pos: Vec2) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.track(pos);
        self.show_scrollbars();
        true
    }

    fn release(&mut self, pos: Vec2) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.track(pos);
        for axis in Axis::ALL {
            let gesture = self.gestures[axis.index()];
            if !gesture.dragging {
                continue;
            }
            let elapsed = self.clock.saturating_sub(gesture.start_time);
            let held = self.clock.saturating_sub(gesture.last_time);
            let velocity = if elapsed.is_zero() || held > self.config.inertia_delay {
                0.0
            } else {
                let v = -(gesture.last_pos - gesture.start_pos) / elapsed.as_secs_f32();
                v.clamp(-self.config.max_velocity, self.config.max_velocity)
            };
            axis.set(&mut self.velocity, velocity);
            self.gestures[axis.index()].dragging = false;
        }
        self.idle = Duration::ZERO;
        debug!(
            "scroll release: velocity ({}, {}) px/s",
            self.velocity.x, self.velocity.y
        );
        true
    }

    /// Move the offset 1:1 with the pointer on every dragging axis.
    fn track(&mut self, pos: Vec2) {
        for axis in Axis::ALL {
            let clock = self.clock;
            let gesture = &mut self.gestures[axis.index()];
            if !gesture.dragging {
                continue;
            }
            let p = axis.of(pos);
            let delta = p - gesture.last_pos;
            if delta == 0.0 {
                continue;
            }
            let direction = if delta < 0.0 {
                ScrollDirection::Forward
            } else {
                ScrollDirection::Backward
            };
            if gesture.direction.is_some_and(|d| d != direction) {
                gesture.start_pos = gesture.last_pos;
                gesture.start_time = gesture.last_time;
            }
            gesture.direction = Some(direction);
            gesture.last_pos = p;
            gesture.last_time = clock;
            let offset = axis.of(self.offset) - delta;
            axis.set(&mut self.offset, offset);
            self.dirty = true;
        }
        self.clamp_offset();
    }

    fn show_scrollbars(&mut self) {
        if self.fade.is_playing() {
            debug!("scrollbar fade cancelled");
        }
        self.fade.stop();
        self.idle = Duration::ZERO;
        if self.opacity != 1.0 {
            self.opacity = 1.0;
            self.dirty = true;
        }
    }

    // -----------------------------------------------------------------------
    // Frame
    // -----------------------------------------------------------------------

    /// Advance the engine clock by `dt`: integrate coast velocity, apply
    /// friction, and run the auto-hide fade.
    pub fn tick(&mut self, dt: Duration) {
        self.clock += dt;
        let secs = dt.as_secs_f32();

        if !self.is_dragging() && !self.velocity.is_zero() {
            self.offset += self.velocity * secs;
            self.clamp_offset();
            let factor = self.config.friction_factor(secs);
            for axis in Axis::ALL {
                let v = axis.of(self.velocity) * factor;
                let v = if v.abs() < self.config.stop_velocity { 0.0 } else { v };
                axis.set(&mut self.velocity, v);
            }
            self.dirty = true;
            if self.velocity.is_zero() {
                debug!("scroll coast stopped at ({}, {})", self.offset.x, self.offset.y);
            }
        }

        if self.auto_hide {
            self.run_fade(dt);
        }
    }

    fn has_thumbs(&self) -> bool {
        Axis::ALL.iter().any(|axis| self.thumb(*axis).is_some())
    }

    fn run_fade(&mut self, dt: Duration) {
        if !self.has_thumbs() {
            self.fade.stop();
            self.idle = Duration::ZERO;
            return;
        }
        if !self.is_idle() {
            self.idle = Duration::ZERO;
            return;
        }
        if let Some(value) = self.fade.advance(dt) {
            self.opacity = value;
            self.dirty = true;
            return;
        }
        if self.opacity <= 0.0 {
            return;
        }
        self.idle += dt;
        if self.idle >= self.config.fade_delay {
            debug!("scrollbar fade start");
            self.fade.retarget(self.opacity, 0.0);
            self.fade.play();
        }
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        for axis in Axis::ALL {
            let value = axis.of(self.offset);
            let limit = axis.of(max);
            let clamped = value.clamp(0.0, limit);
            if clamped != value {
                axis.set(&mut self.offset, clamped);
                axis.set(&mut self.velocity, 0.0);
                self.dirty = true;
            }
        }
    }
}

impl AnimationTarget for ScrollEngine {
    fn animation_property_value(&self, property: AnimatableProperty) -> f32 {
        match property {
            AnimatableProperty::ScrollbarOpacity => self.scrollbar_opacity(),
        }
    }

    fn set_animation_property_value(
        &mut self,
        property: AnimatableProperty,
        value: f32,
        blend_weight: f32,
    ) {
        match property {
            AnimatableProperty::ScrollbarOpacity => {
                let weight = blend_weight.clamp(0.0, 1.0);
                self.opacity = lerp(self.opacity, value, weight).clamp(0.0, 1.0);
                self.dirty = true;
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn vertical_engine() -> ScrollEngine {
        let mut engine = ScrollEngine::default();
        engine.set_scroll(Scroll::VERTICAL);
        engine.set_viewport(Rect::new(0.0, 0.0, 100.0, 200.0));
        engine.set_content_size(Size::new(100.0, 600.0));
        engine
    }

    fn touch(event: TouchEvent, x: f32, y: f32) -> TouchInput {
        TouchInput::primary(event, x, y)
    }

    /// Press at `from_y`, move to `to_y` over `ms` in `steps`, then release.
    fn fling(engine: &mut ScrollEngine, from_y: f32, to_y: f32, ms: u64, steps: u32) {
        assert!(engine.apply_touch(touch(TouchEvent::Press, 50.0, from_y)));
        let step = Duration::from_millis(ms) / steps;
        for i in 1..=steps {
            engine.tick(step);
            let y = from_y + (to_y - from_y) * i as f32 / steps as f32;
            assert!(engine.apply_touch(touch(TouchEvent::Move, 50.0, y)));
        }
        assert!(engine.apply_touch(touch(TouchEvent::Release, 50.0, to_y)));
    }

    // ── permissions ──

    #[test]
    fn scroll_names() {
        assert_eq!(Scroll::parse("none"), Some(Scroll::NONE));
        assert_eq!(Scroll::parse("SCROLL_VERTICAL"), Some(Scroll::VERTICAL));
        assert_eq!(Scroll::parse("Horizontal"), Some(Scroll::HORIZONTAL));
        assert_eq!(Scroll::parse("both"), Some(Scroll::BOTH));
        assert_eq!(Scroll::parse("diagonal"), None);
        assert!(Scroll::BOTH.allows(Axis::Horizontal));
        assert!(!Scroll::VERTICAL.allows(Axis::Horizontal));
    }

    #[test]
    fn friction_factor_is_clamped() {
        let config = ScrollConfig::default();
        assert!((config.friction_factor(0.016) - 0.92).abs() < 1e-5);
        assert_eq!(config.friction_factor(10.0), 0.0);
        assert_eq!(config.friction_factor(0.0), 1.0);
        assert_eq!(ScrollConfig::new().with_friction(-4.0).friction, MIN_FRICTION);
    }

    // ── press ──

    #[test]
    fn press_requires_permission_and_viewport_hit() {
        let mut engine = ScrollEngine::default();
        engine.set_viewport(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!engine.apply_touch(touch(TouchEvent::Press, 10.0, 10.0)));

        engine.set_scroll(Scroll::VERTICAL);
        assert!(!engine.apply_touch(touch(TouchEvent::Press, 150.0, 10.0)));
        assert!(engine.apply_touch(touch(TouchEvent::Press, 10.0, 10.0)));
        assert_eq!(engine.phase(Axis::Vertical), ScrollPhase::Dragging);
        assert_eq!(engine.phase(Axis::Horizontal), ScrollPhase::Idle);
    }

    #[test]
    fn secondary_contacts_are_ignored() {
        let mut engine = vertical_engine();
        let mut t = touch(TouchEvent::Press, 10.0, 10.0);
        t.contact = 1;
        assert!(!engine.apply_touch(t));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn move_and_release_without_drag_are_not_consumed() {
        let mut engine = vertical_engine();
        assert!(!engine.apply_touch(touch(TouchEvent::Move, 10.0, 10.0)));
        assert!(!engine.apply_touch(touch(TouchEvent::Release, 10.0, 10.0)));
    }

    // ── dragging ──

    #[test]
    fn drag_tracks_pointer_one_to_one() {
        let mut engine = vertical_engine();
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 150.0));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 120.0));
        assert_eq!(engine.offset(), Vec2::new(0.0, 30.0));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 130.0));
        assert_eq!(engine.offset(), Vec2::new(0.0, 20.0));
        assert_eq!(engine.direction(Axis::Vertical), Some(ScrollDirection::Backward));
    }

    #[test]
    fn drag_never_leaves_bounds() {
        let mut engine = vertical_engine();
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 100.0));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 500.0));
        assert_eq!(engine.offset().y, 0.0);
        engine.apply_touch(touch(TouchEvent::Move, 50.0, -5000.0));
        assert_eq!(engine.offset().y, 400.0);
        engine.apply_touch(touch(TouchEvent::Move, 50.0, -5000.0));
        assert_eq!(engine.offset(), engine.max_offset());
    }

    #[test]
    fn disabled_axis_stays_pinned() {
        let mut engine = vertical_engine();
        engine.set_content_size(Size::new(1000.0, 600.0));
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 100.0));
        engine.apply_touch(touch(TouchEvent::Move, 0.0, 50.0));
        assert_eq!(engine.offset().x, 0.0);
        assert_eq!(engine.max_offset().x, 0.0);
    }

    // ── release velocity ──

    #[test]
    fn release_velocity_is_distance_over_time() {
        let mut engine = vertical_engine();
        fling(&mut engine, 150.0, 50.0, 100, 5);
        assert!((engine.velocity().y - 1000.0).abs() < 1.0);
        assert_eq!(engine.phase(Axis::Vertical), ScrollPhase::Coasting);

        let mut engine = vertical_engine();
        fling(&mut engine, 100.0, 140.0, 200, 4);
        assert!((engine.velocity().y + 200.0).abs() < 1.0);
    }

    #[test]
    fn zero_duration_gesture_has_zero_velocity() {
        let mut engine = vertical_engine();
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 150.0));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 50.0));
        engine.apply_touch(touch(TouchEvent::Release, 50.0, 50.0));
        assert_eq!(engine.velocity(), Vec2::ZERO);
        assert!(engine.velocity().y.is_finite());
        assert_eq!(engine.offset().y, 100.0);
        assert!(engine.is_idle());
    }

    #[test]
    fn release_velocity_is_capped() {
        let mut engine = vertical_engine();
        engine.set_content_size(Size::new(100.0, 100_000.0));
        fling(&mut engine, 190.0, -2000.0, 16, 1);
        assert_eq!(engine.velocity().y, engine.config().max_velocity);
    }

    #[test]
    fn holding_still_before_release_kills_inertia() {
        let mut engine = vertical_engine();
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 150.0));
        engine.tick(FRAME);
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 100.0));
        engine.tick(Duration::from_millis(150));
        engine.apply_touch(touch(TouchEvent::Release, 50.0, 100.0));
        assert_eq!(engine.velocity(), Vec2::ZERO);
    }

    #[test]
    fn reversal_resets_gesture_start() {
        let mut engine = vertical_engine();
        engine.scroll_to(Vec2::new(0.0, 200.0));
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 100.0));
        engine.tick(Duration::from_millis(50));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 50.0));
        engine.tick(Duration::from_millis(50));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 100.0));
        engine.apply_touch(touch(TouchEvent::Release, 50.0, 100.0));
        // Only the downward run (50 px in 50 ms) counts.
        assert!((engine.velocity().y + 1000.0).abs() < 1.0);
    }

    // ── coasting ──

    #[test]
    fn coast_continues_then_settles() {
        let mut engine = vertical_engine();
        fling(&mut engine, 150.0, 50.0, 100, 5);
        let released_at = engine.offset().y;
        let mut frames = 0;
        while !engine.is_idle() {
            engine.tick(FRAME);
            frames += 1;
            assert!(frames < 1000, "coast never settled");
        }
        assert!(engine.offset().y > released_at);
        assert!(engine.offset().y <= engine.max_offset().y);
        assert_eq!(engine.velocity(), Vec2::ZERO);
    }

    #[test]
    fn friction_always_decays_to_rest() {
        for friction in [0.01_f32, 0.5, 1.0, 3.0, 50.0] {
            for v0 in [150.0_f32, 1000.0, 5000.0] {
                let mut engine = ScrollEngine::new(ScrollConfig::new().with_friction(friction));
                engine.set_scroll(Scroll::VERTICAL);
                engine.set_viewport(Rect::new(0.0, 0.0, 100.0, 100.0));
                engine.set_content_size(Size::new(100.0, 1.0e9));
                engine.scroll_to(Vec2::new(0.0, 1.0));
                engine.velocity = Vec2::new(0.0, v0);
                let mut ticks = 0;
                while !engine.velocity().is_zero() {
                    let before = engine.velocity().y;
                    engine.tick(FRAME);
                    assert!(engine.velocity().y.abs() <= before.abs());
                    ticks += 1;
                    assert!(ticks < 100_000, "friction {friction} v0 {v0} did not decay");
                }
            }
        }
    }

    #[test]
    fn bound_hit_stops_the_axis() {
        let mut engine = vertical_engine();
        engine.scroll_to(Vec2::new(0.0, 390.0));
        fling(&mut engine, 150.0, 140.0, 16, 1);
        engine.tick(FRAME);
        engine.tick(FRAME);
        assert_eq!(engine.offset().y, 400.0);
        assert_eq!(engine.velocity().y, 0.0);
    }

    #[test]
    fn shrinking_content_reclamps() {
        let mut engine = vertical_engine();
        engine.scroll_to(Vec2::new(0.0, 400.0));
        engine.set_content_size(Size::new(100.0, 300.0));
        assert_eq!(engine.offset().y, 100.0);
    }

    #[test]
    fn revoking_permission_mid_drag_cancels() {
        let mut engine = vertical_engine();
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 150.0));
        engine.apply_touch(touch(TouchEvent::Move, 50.0, 100.0));
        engine.set_scroll(Scroll::NONE);
        assert!(engine.is_idle());
        assert_eq!(engine.offset(), Vec2::ZERO);
        assert!(!engine.apply_touch(touch(TouchEvent::Release, 50.0, 0.0)));
        assert_eq!(engine.velocity(), Vec2::ZERO);
    }

    // ── auto-hide ──

    #[test]
    fn scrollbars_fade_after_idle_delay() {
        let mut engine = vertical_engine();
        assert_eq!(engine.scrollbar_opacity(), 1.0);
        for _ in 0..31 {
            engine.tick(FRAME);
        }
        assert!(!engine.fade_clip().is_playing());
        engine.tick(FRAME);
        assert!(engine.fade_clip().is_playing());
        for _ in 0..40 {
            engine.tick(FRAME);
        }
        assert_eq!(engine.scrollbar_opacity(), 0.0);
        assert!(!engine.fade_clip().is_playing());
    }

    #[test]
    fn no_fade_without_scrollbars() {
        let mut fitting = vertical_engine();
        fitting.set_content_size(Size::new(100.0, 150.0));
        let mut locked = vertical_engine();
        locked.set_scroll(Scroll::NONE);

        for engine in [&mut fitting, &mut locked] {
            engine.clear_dirty();
            for _ in 0..100 {
                engine.tick(FRAME);
            }
            assert!(!engine.fade_clip().is_playing());
            assert_eq!(engine.scrollbar_opacity(), 1.0);
            assert!(!engine.is_dirty());
        }
    }

    #[test]
    fn press_cancels_fade() {
        let mut engine = vertical_engine();
        for _ in 0..45 {
            engine.tick(FRAME);
        }
        assert!(engine.scrollbar_opacity() < 1.0);
        engine.apply_touch(touch(TouchEvent::Press, 50.0, 50.0));
        assert_eq!(engine.scrollbar_opacity(), 1.0);
        assert!(!engine.fade_clip().is_playing());
    }

    #[test]
    fn disabled_auto_hide_is_always_visible() {
        let mut engine = vertical_engine();
        engine.set_auto_hide(false);
        for _ in 0..200 {
            engine.tick(FRAME);
        }
        assert_eq!(engine.scrollbar_opacity(), 1.0);
        assert_eq!(
            engine.animation_property_value(AnimatableProperty::ScrollbarOpacity),
            1.0
        );
    }

    #[test]
    fn blended_opacity() {
        let mut engine = vertical_engine();
        engine.set_animation_property_value(AnimatableProperty::ScrollbarOpacity, 0.0, 0.25);
        assert!((engine.scrollbar_opacity() - 0.75).abs() < 1e-6);
        engine.set_animation_property_value(AnimatableProperty::ScrollbarOpacity, 0.0, 7.0);
        assert_eq!(engine.scrollbar_opacity(), 0.0);
    }

    // ── thumb ──

    #[test]
    fn thumb_geometry() {
        let mut engine = vertical_engine();
        let thumb = engine.thumb(Axis::Vertical).unwrap();
        assert!((thumb.size - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(thumb.position, 0.0);
        assert_eq!(thumb.bounds.x, 96.0);

        engine.scroll_to(Vec2::new(0.0, 400.0));
        let thumb = engine.thumb(Axis::Vertical).unwrap();
        assert_eq!(thumb.position, 1.0);
        assert!((thumb.bounds.bottom() - 200.0).abs() < 1e-3);

        assert!(engine.thumb(Axis::Horizontal).is_none());
    }
}

//! Property animation: easing curves, clips, and animatable targets.
//!
//! Animations drive a single [`AnimatableProperty`] from one value to another
//! over a fixed duration. Playback is frame-driven: the owner advances the
//! clip with the elapsed frame time and writes the sampled value back through
//! [`AnimationTarget::set_animation_property_value`].

use std::time::Duration;

// ---------------------------------------------------------------------------
// Curve
// ---------------------------------------------------------------------------

/// Easing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Slow start and end, fast middle.
    #[default]
    QuadraticInOut,
}

impl Curve {
    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Linear interpolation from `from` toward `to` by `weight`.
#[inline]
pub fn lerp(from: f32, to: f32, weight: f32) -> f32 {
    from + (to - from) * weight
}

// ---------------------------------------------------------------------------
// AnimatableProperty
// ---------------------------------------------------------------------------

/// The properties a container exposes to the animation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatableProperty {
    /// Opacity of the scrollbars, `0.0` (hidden) to `1.0` (fully visible).
    ScrollbarOpacity,
}

impl AnimatableProperty {
    /// Number of float components the property carries.
    pub fn component_count(self) -> usize {
        match self {
            AnimatableProperty::ScrollbarOpacity => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// AnimationTarget
// ---------------------------------------------------------------------------

/// Implemented by anything whose properties can be driven by an animation.
pub trait AnimationTarget {
    /// Current value of `property`.
    fn animation_property_value(&self, property: AnimatableProperty) -> f32;

    /// Move `property` toward `value` by `blend_weight` (clamped to `[0, 1]`).
    ///
    /// A weight of `1.0` assigns `value` outright; `0.0` leaves the property
    /// unchanged.
    fn set_animation_property_value(
        &mut self,
        property: AnimatableProperty,
        value: f32,
        blend_weight: f32,
    );
}

// ---------------------------------------------------------------------------
// AnimationClip
// ---------------------------------------------------------------------------

/// A from-to animation of one property, addressable by id.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    id: String,
    property: AnimatableProperty,
    from: f32,
    to: f32,
    duration: Duration,
    curve: Curve,
    elapsed: Duration,
    playing: bool,
}

impl AnimationClip {
    /// Create a stopped clip.
    pub fn new(
        id: impl Into<String>,
        property: AnimatableProperty,
        from: f32,
        to: f32,
        duration: Duration,
        curve: Curve,
    ) -> Self {
        Self {
            id: id.into(),
            property,
            from,
            to,
            duration,
            curve,
            elapsed: Duration::ZERO,
            playing: false,
        }
    }

    /// The clip's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The property this clip animates.
    pub fn property(&self) -> AnimatableProperty {
        self.property
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the clip is currently playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Start (or restart) playback from the beginning.
    pub fn play(&mut self) {
        self.elapsed = Duration::ZERO;
        self.playing = true;
    }

    /// Replace the endpoints. Takes effect from the next sample.
    pub fn retarget(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
    }

    /// Stop playback, keeping the current position.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Playback progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// The value at the current position.
    pub fn sample(&self) -> f32 {
        lerp(self.from, self.to, self.curve.evaluate(self.progress()))
    }

    /// Advance playback by `dt` and return the new value.
    ///
    /// Returns `None` if the clip is not playing. The clip stops itself after
    /// yielding its final value.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        if !self.playing {
            return None;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let value = self.sample();
        if self.elapsed >= self.duration {
            self.playing = false;
        }
        Some(value)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_endpoints() {
        for curve in [Curve::Linear, Curve::QuadraticInOut] {
            assert_eq!(curve.evaluate(0.0), 0.0);
            assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn quadratic_in_out_is_symmetric() {
        let c = Curve::QuadraticInOut;
        assert!((c.evaluate(0.5) - 0.5).abs() < 1e-6);
        assert!((c.evaluate(0.25) + c.evaluate(0.75) - 1.0).abs() < 1e-6);
        assert!(c.evaluate(0.25) < 0.25);
    }

    #[test]
    fn curve_clamps_input() {
        assert_eq!(Curve::Linear.evaluate(-1.0), 0.0);
        assert_eq!(Curve::Linear.evaluate(2.0), 1.0);
    }

    #[test]
    fn clip_not_playing_yields_none() {
        let mut clip = AnimationClip::new(
            "fade",
            AnimatableProperty::ScrollbarOpacity,
            1.0,
            0.0,
            Duration::from_millis(100),
            Curve::Linear,
        );
        assert!(clip.advance(Duration::from_millis(10)).is_none());
    }

    #[test]
    fn clip_advances_and_finishes() {
        let mut clip = AnimationClip::new(
            "fade",
            AnimatableProperty::ScrollbarOpacity,
            1.0,
            0.0,
            Duration::from_millis(100),
            Curve::Linear,
        );
        clip.play();
        let half = clip.advance(Duration::from_millis(50)).unwrap();
        assert!((half - 0.5).abs() < 1e-6);
        assert!(clip.is_playing());
        let end = clip.advance(Duration::from_millis(80)).unwrap();
        assert_eq!(end, 0.0);
        assert!(!clip.is_playing());
    }

    #[test]
    fn zero_duration_clip_jumps_to_end() {
        let mut clip = AnimationClip::new(
            "instant",
            AnimatableProperty::ScrollbarOpacity,
            1.0,
            0.0,
            Duration::ZERO,
            Curve::QuadraticInOut,
        );
        clip.play();
        assert_eq!(clip.advance(Duration::ZERO), Some(0.0));
        assert!(!clip.is_playing());
    }

    #[test]
    fn retarget_changes_endpoints() {
        let mut clip = AnimationClip::new(
            "fade",
            AnimatableProperty::ScrollbarOpacity,
            1.0,
            0.0,
            Duration::from_millis(100),
            Curve::Linear,
        );
        clip.retarget(0.5, 0.0);
        clip.play();
        assert_eq!(clip.sample(), 0.5);
    }

    #[test]
    fn lerp_weights() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn opacity_has_one_component() {
        assert_eq!(AnimatableProperty::ScrollbarOpacity.component_count(), 1);
    }
}

//! Millisecond-clock tween driver.
//!
//! The host ticks the engine with its frame time; the tween is sampled on
//! every tick and reports completion once the configured duration elapsed.
//! Interruption is retarget-on-the-fly: the new tween starts from the
//! current sampled value, not from the stale origin.

use crate::easing::Easing;

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween spec with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween spec.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration_millis: 300,
            easing: Easing::FastOutSlowIn,
            delay_millis: 0,
        }
    }
}

/// An in-flight interpolation between two scalar values.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: u64,
    spec: AnimationSpec,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, spec: AnimationSpec) -> Self {
        let spec = AnimationSpec {
            duration_millis: spec.duration_millis.max(1),
            ..spec
        };
        Self {
            from,
            to,
            start_ms,
            spec,
        }
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear fraction elapsed at `now_ms`, before easing. Clamped to [0, 1].
    pub fn progress(&self, now_ms: u64) -> f32 {
        let begun = self.start_ms + self.spec.delay_millis;
        let elapsed = now_ms.saturating_sub(begun);
        (elapsed as f32 / self.spec.duration_millis as f32).clamp(0.0, 1.0)
    }

    /// True once the configured delay plus duration has elapsed.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased value at `now_ms`. Returns `to` exactly once finished.
    pub fn sample(&self, now_ms: u64) -> f32 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        let eased = self.spec.easing.transform(t);
        self.from + (self.to - self.from) * eased
    }

    /// Redirects the tween toward `new_to`, starting from the value sampled
    /// at `now_ms` so there is no visible jump.
    pub fn retarget(&mut self, now_ms: u64, new_to: f32, spec: AnimationSpec) {
        let current = self.sample(now_ms);
        *self = Self::new(current, new_to, now_ms, spec);
    }
}

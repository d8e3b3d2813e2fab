//! Slide animation timeline
//!
//! Time-based interpolation of the composer's visibility scalar. The
//! timeline is a pure value: the UI samples `value_at` on every frame tick
//! and nothing else observes it. Reopening or closing mid-flight retargets
//! the running interpolation from its current value, so rapid toggling
//! never jumps.

use std::time::{Duration, Instant};

/// Fixed duration of the open/close transition
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Vertical travel of the composer panel in logical px
///
/// The panel's offset is the visibility scalar times this distance, so a
/// fully closed panel (scalar 1.0) rests below the fold.
pub const PANEL_TRAVEL: f32 = 750.0;

/// Cubic ease-in-out timing curve
///
/// Monotonic on [0, 1] with `ease(0) == 0` and `ease(1) == 1`. Input is
/// clamped to that range.
#[must_use]
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An eased interpolation between two scalar values over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Slide {
    /// A zero-length timeline resting at `value`
    #[must_use]
    pub const fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration: Duration::ZERO,
        }
    }

    /// Start a new transition toward `to` from wherever this one is now
    #[must_use]
    pub fn retarget(&self, to: f32, now: Instant) -> Self {
        Self {
            from: self.value_at(now),
            to,
            started_at: now,
            duration: SLIDE_DURATION,
        }
    }

    /// Linear progress through the timeline, clamped to [0, 1]
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at the given time
    ///
    /// Exactly `from` at the start and exactly `to` once the duration has
    /// elapsed.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = ease(self.progress_at(now));
        (self.to - self.from).mul_add(t, self.from)
    }

    /// Whether the timeline has run to completion
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// Value the timeline is heading toward
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ease_hits_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(-1.0), 0.0);
        assert_eq!(ease(2.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            #[allow(clippy::cast_precision_loss)]
            let value = ease(step as f32 / 100.0);
            assert!(value >= last, "ease dipped at step {step}");
            last = value;
        }
    }

    #[test]
    fn settled_timeline_rests_at_value() {
        let now = Instant::now();
        let slide = Slide::settled(1.0, now);
        assert_eq!(slide.value_at(now), 1.0);
        assert_eq!(slide.value_at(now + Duration::from_secs(5)), 1.0);
        assert!(slide.is_settled(now));
    }

    #[test]
    fn retarget_runs_from_start_to_target() {
        let start = Instant::now();
        let slide = Slide::settled(1.0, start).retarget(0.0, start);

        assert_eq!(slide.value_at(start), 1.0);
        assert_eq!(slide.value_at(start + SLIDE_DURATION), 0.0);
        assert_eq!(slide.target(), 0.0);
        assert!(!slide.is_settled(start));
        assert!(slide.is_settled(start + SLIDE_DURATION));
    }

    #[test]
    fn value_moves_monotonically_toward_target() {
        let start = Instant::now();
        let slide = Slide::settled(1.0, start).retarget(0.0, start);

        let mut last = slide.value_at(start);
        for ms in (0..=300).step_by(10) {
            let value = slide.value_at(start + Duration::from_millis(ms));
            assert!(value <= last, "slide reversed at {ms}ms");
            last = value;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn midflight_retarget_continues_from_current_value() {
        let start = Instant::now();
        let opening = Slide::settled(1.0, start).retarget(0.0, start);

        let midpoint = start + SLIDE_DURATION / 2;
        let value_before = opening.value_at(midpoint);
        let closing = opening.retarget(1.0, midpoint);

        assert_eq!(closing.value_at(midpoint), value_before);
        assert_eq!(closing.value_at(midpoint + SLIDE_DURATION), 1.0);
    }

    #[test]
    fn value_is_clamped_past_the_end() {
        let start = Instant::now();
        let slide = Slide::settled(0.0, start).retarget(1.0, start);
        assert_eq!(slide.value_at(start + Duration::from_secs(10)), 1.0);
    }
}

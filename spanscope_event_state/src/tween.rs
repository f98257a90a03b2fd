// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased, host-clocked animations.
//!
//! A [`Tween`] interpolates a fixed-size tuple of values from `from` to `to`
//! over `duration` milliseconds using [`ease_out_sine`]. Sampling at or past
//! the end returns `to` exactly, so callers can snap to the target without
//! accumulating interpolation error.
//!
//! A tween created with [`Tween::deferred`] has no start time yet; it is
//! anchored by the first [`Tween::anchor`] call, typically from the frame
//! that first samples it, so commands issued while the host is idle still
//! play out in full.
//!
//! [`AnimationSlot`] holds at most one animation. Starting a new one replaces
//! (cancels) the previous; there is no queueing and no resume.

use crate::math;

/// Quarter-sine ease-out: fast start, gentle landing.
///
/// `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_sine(t: f64) -> f64 {
    math::sin(t.clamp(0.0, 1.0) * core::f64::consts::FRAC_PI_2)
}

/// Interpolates `N` values over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<const N: usize> {
    from: [f64; N],
    to: [f64; N],
    start: Option<f64>,
    duration: f64,
}

/// Values produced by [`Tween::sample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSample<const N: usize> {
    /// Interpolated values.
    pub values: [f64; N],
    /// `true` once the tween reached its end; `values` then equals the target.
    pub done: bool,
}

impl<const N: usize> Tween<N> {
    /// Creates a tween starting at time `start` (milliseconds).
    ///
    /// A non-positive `duration` completes on the first sample.
    #[must_use]
    pub fn new(from: [f64; N], to: [f64; N], start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start: Some(start),
            duration,
        }
    }

    /// Creates a tween that starts at its first [`anchor`](Self::anchor).
    #[must_use]
    pub fn deferred(from: [f64; N], to: [f64; N], duration: f64) -> Self {
        Self {
            from,
            to,
            start: None,
            duration,
        }
    }

    /// Sets the start time to `now` unless one is already set.
    ///
    /// Returns `true` if this call anchored the tween.
    pub fn anchor(&mut self, now: f64) -> bool {
        if self.start.is_some() {
            return false;
        }
        self.start = Some(now);
        true
    }

    /// Start time, once anchored.
    #[must_use]
    pub fn start_time(&self) -> Option<f64> {
        self.start
    }

    /// Start values.
    #[must_use]
    pub fn start_values(&self) -> [f64; N] {
        self.from
    }

    /// Target values.
    #[must_use]
    pub fn target_values(&self) -> [f64; N] {
        self.to
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear progress at `now`, in `[0, 1]`. Zero until anchored.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let Some(start) = self.start else {
            return 0.0;
        };
        ((now - start) / self.duration).clamp(0.0, 1.0)
    }

    /// Samples the tween at `now`.
    #[must_use]
    pub fn sample(&self, now: f64) -> TweenSample<N> {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return TweenSample {
                values: self.to,
                done: true,
            };
        }
        let eased = ease_out_sine(progress);
        let mut values = self.from;
        for (value, target) in values.iter_mut().zip(self.to) {
            *value += (target - *value) * eased;
        }
        TweenSample {
            values,
            done: false,
        }
    }
}

/// Holds at most one running animation of a given kind.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSlot<T> {
    current: Option<T>,
}

impl<T> Default for AnimationSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> AnimationSlot<T> {
    /// Starts `animation`, returning the one it replaced, if any.
    pub fn start(&mut self, animation: T) -> Option<T> {
        self.current.replace(animation)
    }

    /// Cancels the running animation, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.current.take()
    }

    /// The running animation.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// The running animation, mutable.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.current.as_mut()
    }

    /// Returns `true` while an animation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationSlot, Tween, ease_out_sine};

    #[test]
    fn ease_out_sine_endpoints() {
        assert_eq!(ease_out_sine(0.0), 0.0);
        assert!((ease_out_sine(1.0) - 1.0).abs() < 1e-12);
        assert!(ease_out_sine(0.5) > 0.5, "ease-out runs ahead of linear");
        assert!((ease_out_sine(2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sample_snaps_to_target() {
        let tween = Tween::new([0.0, 1000.0], [200.0, 50.0], 100.0, 400.0);
        let mid = tween.sample(300.0);
        assert!(!mid.done);
        assert!(mid.values[0] > 0.0 && mid.values[0] < 200.0);
        assert!(mid.values[1] < 1000.0 && mid.values[1] > 50.0);

        let end = tween.sample(10_000.0);
        assert!(end.done);
        assert_eq!(end.values, [200.0, 50.0]);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::new([5.0], [-20.0], 0.0, 0.0);
        assert_eq!(tween.progress(0.0), 1.0);
        assert_eq!(tween.sample(0.0).values, [-20.0]);
    }

    #[test]
    fn deferred_tween_starts_at_first_anchor() {
        let mut tween = Tween::deferred([0.0], [100.0], 200.0);
        assert_eq!(tween.start_time(), None);
        assert_eq!(tween.sample(5_000.0).values, [0.0]);
        assert!(!tween.sample(5_000.0).done);

        assert!(tween.anchor(5_000.0));
        assert!(!tween.anchor(9_000.0), "a second anchor keeps the first start");
        assert_eq!(tween.start_time(), Some(5_000.0));

        let mid = tween.sample(5_100.0);
        assert!(!mid.done);
        assert!(mid.values[0] > 50.0 && mid.values[0] < 100.0);
        assert!(tween.sample(5_200.0).done);
    }

    #[test]
    fn slot_replaces_running_animation() {
        let mut slot = AnimationSlot::default();
        assert!(slot.start(Tween::new([0.0], [1.0], 0.0, 10.0)).is_none());
        let replaced = slot.start(Tween::new([0.0], [2.0], 5.0, 10.0));
        assert_eq!(replaced.map(|t| t.target_values()), Some([1.0]));
        assert_eq!(slot.get().map(|t| t.target_values()), Some([2.0]));
        assert!(slot.cancel().is_some());
        assert!(!slot.is_active());
    }
}

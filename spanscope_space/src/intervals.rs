// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline ruler ticks.
//!
//! The ruler above a waterfall wants one labelled tick roughly every `N`
//! physical pixels, at "nice" trace-time values. [`nice_interval`] picks the
//! step on a 1-2-5 ladder and [`compute_timeline_intervals`] walks the visible
//! window writing tick positions into a caller-owned slice.
//!
//! The output is index-addressed and never grows: recomputing on every pan or
//! zoom step reuses the same buffer, and trailing entries left over from a
//! previous, longer run are cleared back to `None`.

use alloc::boxed::Box;
use alloc::vec;

use crate::View;
use crate::math;

/// Picks a "nice" tick step for a desired step of `target` trace units.
///
/// Starts from the power of ten at or below `target` and bumps it to `5x` or
/// `2x` when that power of ten undershoots `target` by more than 5 or 2 times.
/// The result is monotone: a smaller `target` never yields a larger step.
///
/// Returns `None` for non-positive or non-finite targets.
#[must_use]
pub fn nice_interval(target: f64) -> Option<f64> {
    if target <= 0.0 || !target.is_finite() {
        return None;
    }
    let interval = math::powi10(math::floor(math::log10(target)));
    let ratio = target / interval;
    if ratio > 5.0 {
        Some(interval * 5.0)
    } else if ratio > 2.0 {
        Some(interval * 2.0)
    } else {
        Some(interval)
    }
}

/// Writes tick positions covering `view` into `results` and returns the step used.
///
/// Ticks start at the last multiple of the step at or before `view.x` and run
/// until they pass `view.right()`. Positions are in the same space as `view`
/// (origin-relative trace time). Writing stops early if `results` is full.
/// Any `Some` entries after the last written tick are reset to `None`.
///
/// Returns `None` (leaving `results` untouched) when no step can be derived
/// from `target`.
pub fn compute_timeline_intervals(
    view: &View,
    target: f64,
    results: &mut [Option<f64>],
) -> Option<f64> {
    let interval = nice_interval(target)?;

    let mut x = math::floor(view.x / interval) * interval;
    let mut written = 0;
    while x <= view.right() && written < results.len() {
        results[written] = Some(x);
        written += 1;
        x += interval;
    }

    for slot in &mut results[written..] {
        if slot.is_none() {
            break;
        }
        *slot = None;
    }

    Some(interval)
}

/// Fixed-capacity tick buffer for a timeline ruler.
///
/// The buffer is allocated once, sized for the widest container the host
/// expects, and rewritten in place by [`TimelineIntervals::recompute`].
#[derive(Clone, Debug)]
pub struct TimelineIntervals {
    ticks: Box<[Option<f64>]>,
    interval: Option<f64>,
}

impl TimelineIntervals {
    /// Creates an empty buffer able to hold `capacity` ticks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ticks: vec![None; capacity].into_boxed_slice(),
            interval: None,
        }
    }

    /// Number of tick slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ticks.len()
    }

    /// The step chosen by the last recompute, if any.
    #[must_use]
    pub fn interval(&self) -> Option<f64> {
        self.interval
    }

    /// Tick at `index`, if one is present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.ticks.get(index).copied().flatten()
    }

    /// All slots, including trailing `None`s.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.ticks
    }

    /// Iterates over the populated ticks in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks.iter().map_while(|t| *t)
    }

    /// Number of populated ticks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no tick is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.get(0).is_none()
    }

    /// Recomputes ticks for `view`, aiming for one tick every `target` trace units.
    ///
    /// A zero-width view has no timeline; it is rendered as a `0` tick at both
    /// ends, see [`TimelineIntervals::is_empty_timeline`].
    pub fn recompute(&mut self, view: &View, target: f64) {
        if view.is_degenerate() {
            self.set_empty_timeline();
            return;
        }
        if let Some(interval) = compute_timeline_intervals(view, target, &mut self.ticks) {
            self.interval = Some(interval);
        }
    }

    /// Marks the buffer as describing a trace without duration.
    pub fn set_empty_timeline(&mut self) {
        self.interval = None;
        for (i, slot) in self.ticks.iter_mut().enumerate() {
            *slot = if i < 2 { Some(0.0) } else { None };
        }
    }

    /// Returns `true` if the buffer holds the zero-duration marker written by
    /// [`TimelineIntervals::set_empty_timeline`].
    #[must_use]
    pub fn is_empty_timeline(&self) -> bool {
        self.get(0) == Some(0.0) && self.get(1) == Some(0.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{TimelineIntervals, compute_timeline_intervals, nice_interval};
    use crate::View;

    #[test]
    fn nice_interval_uses_one_two_five_ladder() {
        assert_eq!(nice_interval(1.0), Some(1.0));
        assert_eq!(nice_interval(1.9), Some(1.0));
        assert_eq!(nice_interval(3.0), Some(2.0));
        assert_eq!(nice_interval(7.0), Some(5.0));
        assert_eq!(nice_interval(120.0), Some(100.0));
        assert_eq!(nice_interval(0.0), None);
        assert_eq!(nice_interval(f64::NAN), None);
    }

    #[test]
    fn nice_interval_is_monotone() {
        let mut previous = 0.0;
        let mut target = 0.013;
        while target < 50_000.0 {
            let step = nice_interval(target).unwrap();
            assert!(step >= previous, "step shrank at target {target}");
            previous = step;
            target *= 1.07;
        }
    }

    #[test]
    fn ticks_cover_view_and_increase() {
        let view = View::new(130.0, 0.0, 500.0, 1.0);
        let mut out = vec![None; 32];
        let step = compute_timeline_intervals(&view, 100.0, &mut out).unwrap();
        assert_eq!(step, 100.0);

        let ticks: Vec<f64> = out.iter().map_while(|t| *t).collect();
        assert_eq!(ticks.first(), Some(&100.0));
        assert!(*ticks.last().unwrap() + step > view.right());
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn trailing_stale_ticks_are_cleared() {
        let mut out = vec![None; 32];
        compute_timeline_intervals(&View::new(0.0, 0.0, 1000.0, 1.0), 50.0, &mut out);
        let long = out.iter().filter(|t| t.is_some()).count();

        compute_timeline_intervals(&View::new(0.0, 0.0, 1000.0, 1.0), 400.0, &mut out);
        let short = out.iter().filter(|t| t.is_some()).count();
        assert!(short < long);
        assert!(out[short..].iter().all(Option::is_none));
    }

    #[test]
    fn buffer_never_grows() {
        let mut intervals = TimelineIntervals::with_capacity(4);
        intervals.recompute(&View::new(0.0, 0.0, 1000.0, 1.0), 10.0);
        assert_eq!(intervals.capacity(), 4);
        assert_eq!(intervals.len(), 4);
    }

    #[test]
    fn narrower_view_never_widens_step() {
        let mut intervals = TimelineIntervals::with_capacity(64);
        // Target is proportional to view width for a fixed pixel spacing.
        let physical = 800.0;
        let mut width = 10_000.0;
        let mut last = f64::INFINITY;
        while width > 1.0 {
            let view = View::new(0.0, 0.0, width, 1.0);
            intervals.recompute(&view, width / physical * 100.0);
            let step = intervals.interval().unwrap();
            assert!(step <= last);
            last = step;
            width *= 0.8;
        }
    }

    #[test]
    fn degenerate_view_marks_empty_timeline() {
        let mut intervals = TimelineIntervals::with_capacity(8);
        intervals.recompute(&View::new(0.0, 0.0, 1000.0, 1.0), 100.0);
        intervals.recompute(&View::EMPTY, 100.0);
        assert!(intervals.is_empty_timeline());
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals.interval(), None);
    }
}

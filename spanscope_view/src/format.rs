// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;

/// Writes `millis` as an abbreviated duration with `precision` decimals.
///
/// The unit is the largest of `wk`, `d`, `hr`, `min`, `s` and `ms` that the
/// magnitude reaches, with no space before the unit (`12.50ms`, `1.00min`).
///
/// ```
/// use spanscope_view::write_duration;
///
/// let mut label = String::new();
/// write_duration(&mut label, 1_500.0, 2).unwrap();
/// assert_eq!(label, "1.50s");
/// ```
pub fn write_duration<W: fmt::Write>(out: &mut W, millis: f64, precision: usize) -> fmt::Result {
    let magnitude = millis.abs();
    let (value, unit) = if magnitude >= WEEK {
        (millis / WEEK, "wk")
    } else if magnitude >= DAY {
        (millis / DAY, "d")
    } else if magnitude >= HOUR {
        (millis / HOUR, "hr")
    } else if magnitude >= MINUTE {
        (millis / MINUTE, "min")
    } else if magnitude >= SECOND {
        (millis / SECOND, "s")
    } else {
        (millis, "ms")
    };
    write!(out, "{value:.precision$}{unit}")
}

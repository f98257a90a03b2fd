// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that are not available in `core`.

#[cfg(feature = "std")]
fn floor(x: f64) -> f64 {
    f64::floor(x)
}

#[cfg(not(feature = "std"))]
fn floor(x: f64) -> f64 {
    libm::floor(x)
}

#[cfg(feature = "std")]
pub(crate) fn log10(x: f64) -> f64 {
    f64::log10(x)
}

#[cfg(not(feature = "std"))]
pub(crate) fn log10(x: f64) -> f64 {
    libm::log10(x)
}

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// Style values are rounded this way so that `-2.5` and `2.5` land on the
/// same pixel grid (`-2` and `3`).
pub(crate) fn round_half_up(x: f64) -> f64 {
    floor(x + 0.5)
}

/// Rounds `x` to a multiple of `1 / scale`.
pub(crate) fn round_to(x: f64, scale: f64) -> f64 {
    round_half_up(x * scale) / scale
}

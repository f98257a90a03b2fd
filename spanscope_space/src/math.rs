// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float functions that are not available in `core`.

#[cfg(feature = "std")]
pub(crate) fn floor(x: f64) -> f64 {
    f64::floor(x)
}

#[cfg(not(feature = "std"))]
pub(crate) fn floor(x: f64) -> f64 {
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

#[cfg(feature = "std")]
pub(crate) fn powi10(exp: f64) -> f64 {
    f64::powf(10.0, exp)
}

#[cfg(not(feature = "std"))]
pub(crate) fn powi10(exp: f64) -> f64 {
    libm::pow(10.0, exp)
}

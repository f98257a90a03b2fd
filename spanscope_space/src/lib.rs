// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanscope Space: the coordinate spaces behind a trace waterfall.
//!
//! A trace waterfall juggles three 1D spaces along the time axis:
//!
//! - **trace space**: the full extent of the trace, origin-relative
//!   (a trace from `t0` to `t0 + 1000` is `[0, 1000]`).
//! - **trace view**: the window of trace space the user is currently looking at.
//!   Pan and zoom only ever mutate this window.
//! - **physical space**: the pixel extent of the container the timeline is drawn into.
//!
//! This crate provides:
//! - [`View`]: an axis-aligned `[x, y, width, height]` box used for all three spaces.
//! - [`View::between`]: the affine mapping from one space into another, as a
//!   [`kurbo::Affine`], so that span-to-pixel matrices can be composed instead of
//!   incrementally patched.
//! - [`Projection`]: the cached pixel-to-time matrix derived from all three spaces,
//!   with the forward and inverse pixel mappings.
//! - [`Extent`]: a `[start, width]` interval in trace time, used for span extents
//!   and zoom targets.
//! - [`TimelineIntervals`] and [`nice_interval`]: "nice" 1-2-5 tick spacing for a
//!   timeline ruler, written into a fixed-capacity buffer.
//!
//! It does **not** know about rows, elements, gestures or animation; those live in
//! `spanscope_event_state` and `spanscope_view`.
//!
//! ## Minimal example
//!
//! ```rust
//! use spanscope_space::View;
//!
//! // A one second trace drawn into a 500px wide column.
//! let trace_space = View::new(0.0, 0.0, 1000.0, 1.0);
//! let trace_view = View::new(250.0, 0.0, 500.0, 1.0);
//! let physical = View::new(0.0, 0.0, 500.0, 1.0);
//!
//! // Pixel -> trace time.
//! let px_to_time = trace_space.between(&trace_view) * physical.between(&trace_space);
//! let t = px_to_time * kurbo::Point::new(100.0, 0.0);
//! assert!((t.x - 350.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`. Enable either the `std` (default) or `libm` feature
//! for floating point functions.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("spanscope_space requires either the `std` or `libm` feature");

mod error;
mod intervals;
mod math;
mod projection;
mod view;

pub use error::SpaceError;
pub use intervals::{TimelineIntervals, compute_timeline_intervals, nice_interval};
pub use projection::Projection;
pub use view::{Extent, View};

// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanscope Measure: batched width measurement for rendered rows and labels.
//!
//! Reading layout from a host toolkit is expensive, so measurement is split in
//! two phases:
//!
//! 1. Rows and labels are *enqueued* as they are realized
//!    ([`WidthMeasurer::enqueue_measure`]).
//! 2. The queue is *drained* in one batch ([`WidthMeasurer::drain`]), either
//!    once per frame or on demand right before a value is needed, so reads are
//!    always consistent with the elements registered at that moment.
//!
//! Measured widths are cached per key. The measurer also tracks the largest
//! width it has seen and notifies listeners only when that maximum grows.
//!
//! [`TextMeasurer`] estimates label widths from cached per-glyph advances.
//!
//! The host provides the actual numbers through [`ElementMetrics`] and
//! [`GlyphMetrics`].
//!
//! ## Minimal example
//!
//! ```rust
//! use spanscope_measure::{ElementMetrics, WidthMeasurer};
//!
//! struct Fixed;
//! impl ElementMetrics<u32> for Fixed {
//!     fn element_width(&self, element: &u32) -> Option<f64> {
//!         Some(f64::from(*element) * 10.0)
//!     }
//! }
//!
//! let mut rows = WidthMeasurer::<&str, u32>::new();
//! rows.enqueue_measure("root", 12);
//! rows.enqueue_measure("child", 30);
//!
//! let report = rows.drain(&Fixed);
//! assert_eq!(report.measured, 2);
//! assert_eq!(report.max_changed, Some(300.0));
//! assert_eq!(rows.get(&"root"), Some(120.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod text;
mod width;

pub use text::{GlyphMetrics, TextMeasurer};
pub use width::{DrainReport, ElementMetrics, WidthMeasurer};

// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanscope Virtual List: vertical virtualization for trace rows.
//!
//! A trace view may flatten tens of thousands of spans into rows. Only the rows
//! inside (or just around) the viewport exist as host elements; this crate
//! decides which ones, and where to scroll when a row must be brought into view.
//!
//! - [`ExtentModel`]: a 1D strip of rows with per-row extents and offset queries.
//! - [`FixedExtentModel`]: every row has the same height (the trace view's case).
//! - [`compute_visible_strip`]: given a scroll offset, viewport height, and
//!   overscan, returns the realized index range and the spacer extents around it.
//! - [`VirtualizedList`]: scroll state plus [`VirtualizedList::scroll_to_row`],
//!   which applies a [`ScrollAnchor`] policy.
//!
//! ```rust
//! use spanscope_virtual_list::{FixedExtentModel, ScrollAnchor, VirtualizedList};
//!
//! let mut list = VirtualizedList::new(FixedExtentModel::new(1_000, 24.0), 480.0);
//!
//! // Row 100 is below the viewport: `Auto` aligns it with the bottom edge.
//! assert_eq!(list.scroll_to_row(100, ScrollAnchor::Auto), Some(100.0 * 24.0 - 480.0 + 24.0));
//!
//! // Already visible: nothing to do.
//! assert_eq!(list.scroll_to_row(95, ScrollAnchor::CenterIfOutside), None);
//!
//! let strip = list.visible_strip();
//! assert!(strip.start <= 95 && 95 < strip.end);
//! ```
//!
//! Extents are logical pixels, finite and non-negative. This crate is `no_std`.

#![no_std]

mod fixed;
mod list;
mod model;

pub use fixed::FixedExtentModel;
pub use list::{ScrollAnchor, VirtualizedList};
pub use model::{ExtentModel, VisibleStrip, compute_visible_strip};

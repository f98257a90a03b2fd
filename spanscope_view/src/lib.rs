// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanscope View: a headless view manager for trace waterfalls.
//!
//! A waterfall shows a tree of spans in two columns: a list column with the
//! (indented) span names and a span list column where each span is a bar on a
//! shared timeline. [`ViewManager`] owns everything that places those
//! elements:
//!
//! - the trace space, trace view and physical spaces from `spanscope_space`,
//!   clamped on every change;
//! - wheel zoom and pan, the zoom-to-span animation and the column divider drag;
//! - the list column's shared horizontal scroll, driven by row wheel events or
//!   a fake scrollbar, with out-of-bounds recovery once scrolling settles;
//! - vertical virtualization through `spanscope_virtual_list`;
//! - per-frame projection of every registered element into a [`Frame`].
//!
//! It does **not** render, lay out text or own the trace tree. Elements are
//! opaque [`ElementId`] handles; their widths come from a host-provided
//! [`LayoutMetrics`] implementation, and time comes from [`ViewManager::tick`].
//! Animations and settle timers started by input or commands begin counting at
//! the next tick, so hosts only need to tick while `tick` asks for it.
//!
//! ## Minimal example
//!
//! ```rust
//! use spanscope_view::{ElementId, ElementMetrics, Extent, GlyphMetrics, ViewConfig, ViewManager};
//!
//! struct Monospace;
//!
//! impl ElementMetrics<ElementId> for Monospace {
//!     fn element_width(&self, _: &ElementId) -> Option<f64> {
//!         None
//!     }
//! }
//!
//! impl GlyphMetrics for Monospace {
//!     fn glyph_advance(&self, _: char) -> f64 {
//!         7.0
//!     }
//! }
//!
//! let mut view = ViewManager::new(0.4, 0.6, ViewConfig::default(), Monospace).unwrap();
//! view.initialize_trace_space(1_700_000_000_000.0, 1000.0, 1.0).unwrap();
//! view.initialize_physical_space(1000.0, 600.0).unwrap();
//!
//! // Zoom into [1_700_000_000_200, +50]. The animation starts at the next
//! // tick and runs for at most 600ms.
//! view.on_zoom_into_space(Extent::new(1_700_000_000_200.0, 50.0));
//! assert!(view.tick(0.0));
//! assert!(!view.tick(1000.0));
//! assert_eq!(view.trace_view().x, 200.0);
//! assert_eq!(view.trace_view().width, 50.0);
//! ```
//!
//! This crate is `no_std`. Enable either the `std` (default) or `libm` feature
//! for floating point functions.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("spanscope_view requires either the `std` or `libm` feature");

mod columns;
mod config;
mod element;
mod error;
pub mod events;
mod format;
mod frame;
mod manager;
mod math;
mod placement;
mod rows;
mod tree;

pub use columns::{Column, ColumnKind, Columns};
pub use config::ViewConfig;
pub use element::{
    Binding, ColumnRef, ElementId, IndicatorRef, LayoutMetrics, ResizeEntry, ScrollbarRef,
    SpanRef, SpanTextRef,
};
pub use error::ColumnError;
pub use format::write_duration;
pub use frame::{
    ArrowStyle, DividerStyle, Frame, IndicatorContainerStyle, IndicatorStyle, InvisibleBarStyle,
    ListRowStyle, ScrollbarStyle, SpanBarStyle, SpanTextStyle, TimelineTickStyle,
};
pub use manager::{RevealMode, ScrollSource, ViewManager, ViewUpdate};
pub use placement::{PlacedText, SpanMatrix, TextPlacement, place_span_text, span_matrix};
pub use rows::ArrowSide;
pub use tree::{
    Indicator, IndicatorKey, NodeKey, NodeRef, SearchMatch, SearchResults, TraceTreeSource,
};

pub use spanscope_event_state::wheel::{Modifiers, WheelInput};
pub use spanscope_measure::{ElementMetrics, GlyphMetrics};
pub use spanscope_space::{Extent, Projection, SpaceError, TimelineIntervals, View};
pub use spanscope_virtual_list::{ScrollAnchor, VirtualizedList};

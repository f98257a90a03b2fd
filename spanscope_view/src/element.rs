// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host element handles and registration payloads.
//!
//! The view manager never touches a real widget tree. Hosts hand it opaque
//! [`ElementId`]s when rows, bars and labels are realized, read back computed
//! styles from the [`Frame`](crate::Frame), and forward input for the elements
//! the manager bound a gesture role to.

use spanscope_measure::{ElementMetrics, GlyphMetrics};
use spanscope_space::Extent;

use crate::tree::{Indicator, NodeRef};

/// Opaque handle to a host element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Layout information the host provides on demand.
///
/// Blanket-implemented for anything that can report element widths and glyph
/// advances.
pub trait LayoutMetrics: ElementMetrics<ElementId> + GlyphMetrics {}

impl<T: ElementMetrics<ElementId> + GlyphMetrics + ?Sized> LayoutMetrics for T {}

/// Gesture role bound to a registered element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Wheel over the timeline: zoom with the zoom modifier, pan otherwise.
    Wheel,
    /// Wheel over a list row: scrolls all rows horizontally in lockstep.
    SyncedScroll,
    /// Pointer down starts a column divider drag.
    DividerDrag,
    /// Scroll events from the horizontal fake scrollbar.
    ScrollbarScroll,
}

/// Content box reported by a container resize notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeEntry {
    /// Content width.
    pub width: f64,
    /// Content height.
    pub height: f64,
}

impl ResizeEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A row cell in one of the two columns.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnRef {
    /// The cell element; wheel input over it is routed.
    pub element: ElementId,
    /// The horizontally scrolled inner element (list column only). It is
    /// measured and translated with the column.
    pub content: Option<ElementId>,
    /// The tree node rendered in this row.
    pub node: NodeRef,
}

/// An element positioned from a span's extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanRef {
    /// The element.
    pub element: ElementId,
    /// Absolute span extent.
    pub space: Extent,
}

/// A span label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanTextRef<'a> {
    /// The label element.
    pub element: ElementId,
    /// Label text, measured to choose its placement.
    pub text: &'a str,
    /// Absolute span extent.
    pub space: Extent,
}

/// A timeline indicator marker.
#[derive(Clone, Debug, PartialEq)]
pub struct IndicatorRef {
    /// The marker element; wheel input over it is routed to the timeline.
    pub element: ElementId,
    /// The marker's label element, measured for label anchoring.
    pub label: Option<ElementId>,
    /// What the marker shows.
    pub indicator: Indicator,
}

/// The horizontal fake scrollbar under the list column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarRef {
    /// The scrolling container.
    pub element: ElementId,
    /// Its sized child, stretched to the widest row.
    pub content: Option<ElementId>,
}

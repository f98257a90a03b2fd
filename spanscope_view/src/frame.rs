// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed styles produced by [`ViewManager::draw`](crate::ViewManager::draw).
//!
//! A [`Frame`] is the complete set of style writes for one draw. Hosts apply
//! each entry to the element it names. The buffers are owned by the manager
//! and rewritten in place on every draw.

use alloc::string::String;
use alloc::vec::Vec;

use crate::element::ElementId;
use crate::placement::{SpanMatrix, TextPlacement};
use crate::rows::ArrowSide;

/// Divider position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DividerStyle {
    /// The divider element.
    pub element: ElementId,
    /// Divider width.
    pub width: f64,
    /// Offset from the container's left edge, rounded to a tenth of a pixel.
    pub translate_x: f64,
}

/// Indicator overlay position; compensates for the vertical scrollbar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorContainerStyle {
    /// The overlay element.
    pub element: ElementId,
    /// Horizontal offset.
    pub translate_x: f64,
    /// Width as a percentage of the container.
    pub width_percent: f64,
}

/// Horizontal fake scrollbar state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarStyle {
    /// The scrolling element.
    pub element: ElementId,
    /// Its sized child.
    pub content: Option<ElementId>,
    /// Width of the sized child.
    pub content_width: f64,
    /// Scroll position to apply.
    pub scroll_left: f64,
    /// Width as a percentage of the container.
    pub width_percent: f64,
}

/// Translate of one list row's scrolled content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListRowStyle {
    /// Row slot.
    pub row: usize,
    /// The scrolled content element.
    pub element: ElementId,
    /// Horizontal offset (the shared list column translate).
    pub translate_x: f64,
}

/// Transform of a span bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanBarStyle {
    /// Row slot.
    pub row: usize,
    /// The bar element.
    pub element: ElementId,
    /// Bar matrix.
    pub transform: SpanMatrix,
}

/// Placement of a span label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanTextStyle {
    /// Row slot.
    pub row: usize,
    /// The label element.
    pub element: ElementId,
    /// Anchor.
    pub placement: TextPlacement,
    /// Horizontal offset.
    pub translate_x: f64,
}

/// Visibility of an off-screen span arrow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    /// Row slot.
    pub row: usize,
    /// The arrow element.
    pub element: ElementId,
    /// Whether the arrow is shown.
    pub visible: bool,
    /// Which side it points to.
    pub side: ArrowSide,
}

/// Offset of a bar that only tracks its start timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvisibleBarStyle {
    /// Row slot.
    pub row: usize,
    /// The bar element.
    pub element: ElementId,
    /// Horizontal offset.
    pub translate_x: f64,
}

/// A timeline indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorStyle {
    /// Indicator slot.
    pub index: usize,
    /// The marker element.
    pub element: ElementId,
    /// The label element.
    pub label: Option<ElementId>,
    /// Whether the marker is shown.
    pub visible: bool,
    /// Marker offset, clamped just outside the timeline edges.
    pub translate_x: f64,
    /// Label offset relative to the marker, once the label was measured.
    pub label_offset: Option<f64>,
    /// Stacking order: markers at either end of the visible range sit below.
    pub z_index: u8,
}

/// A timeline ruler tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimelineTickStyle {
    /// Tick slot.
    pub index: usize,
    /// The tick element.
    pub element: ElementId,
    /// Whether the tick is shown.
    pub visible: bool,
    /// Whether the tick's vertical line is shown.
    pub line_visible: bool,
    /// Horizontal offset.
    pub translate_x: f64,
    /// Formatted duration.
    pub label: String,
}

/// Everything a draw computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// List column share, rounded to three decimals.
    pub list_column_width: f64,
    /// Span column share, rounded to three decimals.
    pub span_column_width: f64,
    /// Divider position.
    pub divider: Option<DividerStyle>,
    /// Indicator overlay.
    pub indicator_container: Option<IndicatorContainerStyle>,
    /// Shared list column translate.
    pub list_translate_x: f64,
    /// Per-row list content translates.
    pub list_rows: Vec<ListRowStyle>,
    /// Horizontal fake scrollbar.
    pub horizontal_scrollbar: Option<ScrollbarStyle>,
    /// Span bars.
    pub span_bars: Vec<SpanBarStyle>,
    /// Span labels.
    pub span_texts: Vec<SpanTextStyle>,
    /// Off-screen arrows.
    pub arrows: Vec<ArrowStyle>,
    /// Start-only bars.
    pub invisible_bars: Vec<InvisibleBarStyle>,
    /// Timeline indicators.
    pub indicators: Vec<IndicatorStyle>,
    /// Ruler ticks.
    pub timeline: Vec<TimelineTickStyle>,
    /// Whether timeline elements accept pointer events (off while wheeling).
    pub pointer_events: bool,
    /// Whether text selection is enabled (off while dragging the divider).
    pub user_select: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            list_column_width: 0.0,
            span_column_width: 0.0,
            divider: None,
            indicator_container: None,
            list_translate_x: 0.0,
            list_rows: Vec::new(),
            horizontal_scrollbar: None,
            span_bars: Vec::new(),
            span_texts: Vec::new(),
            arrows: Vec::new(),
            invisible_bars: Vec::new(),
            indicators: Vec::new(),
            timeline: Vec::new(),
            pointer_events: true,
            user_select: true,
        }
    }
}

impl Frame {
    /// Span bar style of row `row`.
    #[must_use]
    pub fn span_bar(&self, row: usize) -> Option<&SpanBarStyle> {
        self.span_bars.iter().find(|s| s.row == row)
    }

    /// Label style of row `row`.
    #[must_use]
    pub fn span_text(&self, row: usize) -> Option<&SpanTextStyle> {
        self.span_texts.iter().find(|s| s.row == row)
    }

    /// Arrow style of row `row`.
    #[must_use]
    pub fn arrow(&self, row: usize) -> Option<&ArrowStyle> {
        self.arrows.iter().find(|s| s.row == row)
    }

    /// Style of indicator slot `index`.
    #[must_use]
    pub fn indicator(&self, index: usize) -> Option<&IndicatorStyle> {
        self.indicators.iter().find(|s| s.index == index)
    }

    pub(crate) fn clear_rows(&mut self) {
        self.list_rows.clear();
        self.span_bars.clear();
        self.span_texts.clear();
        self.arrows.clear();
        self.invisible_bars.clear();
        self.indicators.clear();
    }

    /// Returns tick slot `n` for rewriting, keeping its label allocation.
    pub(crate) fn tick_mut(&mut self, n: usize) -> &mut TimelineTickStyle {
        if n == self.timeline.len() {
            self.timeline.push(TimelineTickStyle::default());
        }
        &mut self.timeline[n]
    }
}

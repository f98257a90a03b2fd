// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view manager: owner of the trace spaces and everything projected through them.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Affine, Point, Vec2};
use spanscope_event_state::debounce::Debounce;
use spanscope_event_state::drag::PointerDrag;
use spanscope_event_state::tween::{AnimationSlot, Tween};
use spanscope_event_state::wheel::{WheelInput, WheelIntent};
use spanscope_measure::{TextMeasurer, WidthMeasurer};
use spanscope_space::{Extent, Projection, SpaceError, TimelineIntervals, View};
use spanscope_virtual_list::{FixedExtentModel, ScrollAnchor, VirtualizedList};

use crate::columns::{ColumnKind, Columns};
use crate::config::ViewConfig;
use crate::element::{
    Binding, ColumnRef, ElementId, IndicatorRef, LayoutMetrics, ResizeEntry, ScrollbarRef,
    SpanRef, SpanTextRef,
};
use crate::error::ColumnError;
use crate::events::{DividerResizeEnd, ViewEvents, VirtualizedListInit};
use crate::format::write_duration;
use crate::frame::{
    ArrowStyle, DividerStyle, Frame, IndicatorContainerStyle, IndicatorStyle, InvisibleBarStyle,
    ListRowStyle, ScrollbarStyle, SpanBarStyle, SpanTextStyle,
};
use crate::math;
use crate::placement::{PlacedText, SpanMatrix, place_span_text, span_matrix};
use crate::rows::{ArrowSide, ArrowSlot, RowSlots};
use crate::tree::{IndicatorKey, NodeKey, NodeRef, SearchResults, TraceTreeSource};

/// Gap between an indicator marker and its label.
const INDICATOR_LABEL_PADDING: f64 = 2.0;

/// Offset of the trailing `0.00ms` label on an empty timeline.
const EMPTY_TIMELINE_LABEL_OFFSET: f64 = 43.0;

/// Which input currently drives the list column's horizontal scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollSource {
    /// Wheel events over a list row.
    List,
    /// The horizontal fake scrollbar under the list column.
    FakeScrollbar,
}

/// How a horizontal row reveal treats its target offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealMode {
    /// Use the target as is.
    Exact,
    /// Clamp the target against the widest measured row.
    #[default]
    Measured,
}

/// A partial trace view update; missing fields keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewUpdate {
    /// New view start.
    pub x: Option<f64>,
    /// New view width.
    pub width: Option<f64>,
}

impl ViewUpdate {
    /// Updates both the start and the width.
    #[must_use]
    pub const fn new(x: f64, width: f64) -> Self {
        Self {
            x: Some(x),
            width: Some(width),
        }
    }

    /// Updates the start only.
    #[must_use]
    pub const fn x(x: f64) -> Self {
        Self {
            x: Some(x),
            width: None,
        }
    }

    /// Updates the width only.
    #[must_use]
    pub const fn width(width: f64) -> Self {
        Self {
            x: None,
            width: Some(width),
        }
    }
}

/// Headless controller for a trace waterfall.
///
/// The manager owns the trace space, the trace view and the physical spaces,
/// the two resizable columns and the registry of rendered elements. Hosts
/// forward input through the `route_*` and `on_*` methods, advance time with
/// [`tick`](Self::tick) and apply the styles returned by [`draw`](Self::draw).
///
/// Every mutator is a no-op while the trace view is degenerate (zero width).
pub struct ViewManager<M> {
    config: ViewConfig,
    metrics: M,

    origin: f64,
    trace_space: View,
    trace_view: View,
    trace_physical_space: View,
    container_physical_space: View,
    projection: Projection,
    intervals: TimelineIntervals,

    columns: Columns,
    column_preview: Option<(f64, f64)>,
    rows: RowSlots,
    indicators: Vec<Option<IndicatorRef>>,
    timeline_ticks: Vec<Option<ElementId>>,

    bindings: HashMap<ElementId, Binding>,
    container: Option<ElementId>,
    observing: bool,
    divider: Option<ElementId>,
    indicator_container: Option<ElementId>,
    scrollbar: Option<ScrollbarRef>,
    list: Option<VirtualizedList>,

    row_measurer: WidthMeasurer<NodeKey, ElementId>,
    indicator_label_measurer: WidthMeasurer<IndicatorKey, ElementId>,
    text_measurer: TextMeasurer,
    events: ViewEvents,

    scrolling_source: Option<ScrollSource>,
    vertical_scrollbar_width: f64,
    scroll_left: f64,
    scrollbar_content_width: f64,
    scrollbar_sync_pending: bool,

    divider_drag: PointerDrag,
    scale_mode: bool,
    user_select: bool,
    pointer_events: bool,

    wheel_end: Debounce,
    scroll_end: Debounce,
    zoom_animation: AnimationSlot<Tween<2>>,
    row_scroll_animation: AnimationSlot<Tween<1>>,

    pending_reveal: Option<NodeRef>,
    last_scrolled_node: Option<NodeKey>,
    frame: Frame,
}

impl<M> fmt::Debug for ViewManager<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewManager")
            .field("origin", &self.origin)
            .field("trace_space", &self.trace_space)
            .field("trace_view", &self.trace_view)
            .field("trace_physical_space", &self.trace_physical_space)
            .field("columns", &self.columns)
            .field("scrolling_source", &self.scrolling_source)
            .field("bindings", &self.bindings.len())
            .finish_non_exhaustive()
    }
}

impl<M: LayoutMetrics> ViewManager<M> {
    /// Creates a manager with the given column split.
    ///
    /// The spaces start out empty (and the trace view degenerate) until
    /// [`initialize_trace_space`](Self::initialize_trace_space) and
    /// [`initialize_physical_space`](Self::initialize_physical_space) are called.
    pub fn new(
        list: f64,
        span_list: f64,
        config: ViewConfig,
        metrics: M,
    ) -> Result<Self, ColumnError> {
        let columns = Columns::new(list, span_list)?;
        Ok(Self {
            metrics,
            origin: 0.0,
            trace_space: View::EMPTY,
            trace_view: View::EMPTY,
            trace_physical_space: View::EMPTY,
            container_physical_space: View::EMPTY,
            projection: Projection::default(),
            intervals: TimelineIntervals::with_capacity(config.max_interval_count),
            columns,
            column_preview: None,
            rows: RowSlots::default(),
            indicators: Vec::new(),
            timeline_ticks: Vec::new(),
            bindings: HashMap::new(),
            container: None,
            observing: false,
            divider: None,
            indicator_container: None,
            scrollbar: None,
            list: None,
            row_measurer: WidthMeasurer::new(),
            indicator_label_measurer: WidthMeasurer::new(),
            text_measurer: TextMeasurer::new(),
            events: ViewEvents::default(),
            scrolling_source: None,
            vertical_scrollbar_width: 0.0,
            scroll_left: 0.0,
            scrollbar_content_width: 0.0,
            scrollbar_sync_pending: false,
            divider_drag: PointerDrag::default(),
            scale_mode: false,
            user_select: true,
            pointer_events: true,
            wheel_end: Debounce::new(config.wheel_end_debounce_ms),
            scroll_end: Debounce::new(config.scroll_end_debounce_ms),
            zoom_animation: AnimationSlot::default(),
            row_scroll_animation: AnimationSlot::default(),
            pending_reveal: None,
            last_scrolled_node: None,
            frame: Frame::default(),
            config,
        })
    }

    // --- Spaces -----------------------------------------------------------

    /// Sets the trace extent and resets the view to show all of it.
    ///
    /// `origin` is the absolute timestamp of the trace start; every span
    /// extent handed to the manager is absolute and is made relative to it.
    pub fn initialize_trace_space(
        &mut self,
        origin: f64,
        width: f64,
        height: f64,
    ) -> Result<(), SpaceError> {
        if !origin.is_finite() {
            return Err(SpaceError::NonFinite {
                component: "origin",
                value: origin,
            });
        }
        let space = View::try_new(0.0, 0.0, width, height)?;
        self.origin = origin;
        self.trace_space = space;
        self.trace_view = space;
        if space.is_degenerate() {
            log::debug!("trace has no duration, timeline disabled");
        }
        self.recompute();
        Ok(())
    }

    /// Sets the container size; the timeline gets the span column's share of it.
    pub fn initialize_physical_space(&mut self, width: f64, height: f64) -> Result<(), SpaceError> {
        let container = View::try_new(0.0, 0.0, width, height)?;
        self.container_physical_space = container;
        self.trace_physical_space =
            View::new(0.0, 0.0, width * self.columns.span_list.width, height);
        self.recompute();
        Ok(())
    }

    /// Moves and/or resizes the trace view.
    ///
    /// The width is clamped to `[min_zoom_precision, trace width]` first, then
    /// the start to `[0, trace width - width]`, so panning against an edge
    /// never shrinks the view. Timeline intervals and the pixel matrix are
    /// recomputed before returning.
    pub fn set_trace_view(&mut self, update: ViewUpdate) {
        if self.trace_view.is_degenerate() {
            return;
        }
        let total = self.trace_space.width;
        let width = update
            .width
            .filter(|w| w.is_finite())
            .unwrap_or(self.trace_view.width)
            .max(self.config.min_zoom_precision)
            .min(total);
        let x = update
            .x
            .filter(|x| x.is_finite())
            .unwrap_or(self.trace_view.x)
            .max(0.0)
            .min(total - width);
        self.trace_view.x = x;
        self.trace_view.width = width;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.projection = Projection::new(
            self.origin,
            self.trace_space,
            self.trace_view,
            self.trace_physical_space,
        );
        let target = self.trace_physical_space.between(&self.trace_view).as_coeffs()[0]
            * self.config.interval_spacing_px
            * self.config.device_pixel_ratio;
        self.intervals.recompute(&self.trace_view, target);
    }

    // --- Input routing ----------------------------------------------------

    /// Forwards a wheel event that hit `element`.
    ///
    /// Returns `true` when the event was consumed and the host should prevent
    /// its default action. Zero deltas are never consumed so browser
    /// back/forward swipes keep working.
    pub fn route_wheel(&mut self, element: ElementId, input: WheelInput) -> bool {
        match self.bindings.get(&element) {
            Some(Binding::Wheel) => self.on_wheel(input),
            Some(Binding::SyncedScroll) => self.on_synced_scrollbar_scroll(input),
            _ => false,
        }
    }

    /// Forwards a native scroll of `element` to `scroll_left`.
    pub fn route_scroll(&mut self, element: ElementId, scroll_left: f64) -> bool {
        match self.bindings.get(&element) {
            Some(Binding::ScrollbarScroll) => self.on_horizontal_scrollbar_scroll(scroll_left),
            _ => false,
        }
    }

    /// Forwards a pointer press on `element`.
    pub fn route_pointer_down(&mut self, element: ElementId, at: Point) -> bool {
        match self.bindings.get(&element) {
            Some(Binding::DividerDrag) => self.on_divider_pointer_down(at),
            _ => false,
        }
    }

    fn on_wheel(&mut self, input: WheelInput) -> bool {
        if self.trace_view.is_degenerate() {
            return false;
        }
        let intent = input.intent(self.config.zoom_modifier, self.config.wheel_zoom_factor);
        if !intent.consumes() {
            return false;
        }

        let update = match intent {
            WheelIntent::Zoom { scale, anchor_x } => {
                let anchor = self.projection.cursor_to_time(anchor_x);
                let about_cursor = Affine::translate(Vec2::new(anchor, 0.0))
                    * Affine::scale_non_uniform(scale, 1.0)
                    * Affine::translate(Vec2::new(-anchor, 0.0));
                let view = self.trace_view.transform(about_cursor);
                ViewUpdate::new(view.x, view.width)
            }
            WheelIntent::Pan { distance } => {
                let physical = self.trace_physical_space.width;
                if physical <= 0.0 {
                    return false;
                }
                ViewUpdate::x(self.trace_view.x + distance / physical * self.trace_view.width)
            }
        };

        if self.zoom_animation.cancel().is_some() {
            log::trace!("wheel cancelled zoom animation");
        }
        self.wheel_end.arm();
        self.pointer_events = false;
        self.set_trace_view(update);
        self.redraw();
        true
    }

    fn on_synced_scrollbar_scroll(&mut self, input: WheelInput) -> bool {
        if self
            .scrolling_source
            .is_some_and(|source| source != ScrollSource::List)
        {
            return false;
        }
        let distance = input.horizontal_distance();
        if distance == 0.0 {
            return false;
        }
        self.scrolling_source = Some(ScrollSource::List);
        self.row_scroll_animation.cancel();
        self.enqueue_scroll_end_check();

        let translate = self.clamp_row_transform(self.columns.list.translate_x - distance);
        if translate == self.columns.list.translate_x {
            return true;
        }
        self.columns.list.translate_x = translate;
        self.scrollbar_sync_pending = true;
        self.redraw();
        true
    }

    fn on_horizontal_scrollbar_scroll(&mut self, scroll_left: f64) -> bool {
        if self
            .scrolling_source
            .is_some_and(|source| source != ScrollSource::FakeScrollbar)
        {
            return false;
        }
        self.scrolling_source = Some(ScrollSource::FakeScrollbar);
        self.scroll_left = scroll_left;
        self.enqueue_scroll_end_check();
        self.columns.list.translate_x = self.clamp_row_transform(-scroll_left);
        self.redraw();
        true
    }

    fn on_divider_pointer_down(&mut self, at: Point) -> bool {
        if self.container.is_none() {
            return false;
        }
        let total = self.trace_space.width;
        self.scale_mode =
            (self.trace_view.width - total).abs() <= self.config.full_view_tolerance * total;
        self.divider_drag.begin(at);
        self.user_select = false;
        self.redraw();
        true
    }

    /// Document-level pointer move; drives an active divider drag.
    pub fn on_pointer_move(&mut self, at: Point) -> bool {
        let Some(step) = self.divider_drag.step(at) else {
            return false;
        };
        let container = self.container_physical_space.width;
        if container <= 0.0 {
            return false;
        }

        let preview = self
            .columns
            .preview(step.total.x / container, self.config.min_column_width);
        self.column_preview = Some(preview);
        self.trace_physical_space.width = preview.1 * container;

        let physical = self.trace_physical_space.width;
        if self.scale_mode || self.trace_view.is_degenerate() || physical <= 0.0 {
            self.recompute();
        } else {
            // Keep content under the pointer: the view grows by what the column lost.
            let delta = self.trace_view.width * -step.delta.x / physical;
            self.set_trace_view(ViewUpdate::new(
                self.trace_view.x - delta,
                self.trace_view.width + delta,
            ));
        }
        self.redraw();
        true
    }

    /// Document-level pointer release; commits an active divider drag.
    ///
    /// Dispatches [`DividerResizeEnd`] with the committed list column width.
    pub fn on_pointer_up(&mut self, at: Point) -> bool {
        let Some(total) = self.divider_drag.finish(at) else {
            return false;
        };
        self.column_preview = None;
        let container = self.container_physical_space.width;
        let delta = if container > 0.0 {
            total.x / container
        } else {
            0.0
        };
        let list = self.columns.resize_by(delta, self.config.min_column_width);
        self.user_select = true;
        self.enqueue_scroll_end_check();

        self.trace_physical_space.width = self.columns.span_list.width * container;
        self.recompute();

        log::debug!("divider resize committed, list column {list:.3}");
        self.events.dispatch::<DividerResizeEnd>(&list);
        self.redraw();
        true
    }

    // --- Registration -----------------------------------------------------

    /// Registers (or with `None`, releases) the cell of `kind` in row slot `index`.
    ///
    /// List cells scroll with the list column and are queued for measurement;
    /// span list cells receive wheel pan and zoom.
    pub fn register_column_ref(&mut self, kind: ColumnKind, index: usize, column: Option<ColumnRef>) {
        let next = column
            .as_ref()
            .map(|c| (c.element, c.content.unwrap_or(c.element), c.node.key));
        let slot = self.rows.slot_mut(index);
        let cell = match kind {
            ColumnKind::List => &mut slot.list,
            ColumnKind::SpanList => &mut slot.span_list,
        };
        let previous = core::mem::replace(cell, column);

        if let Some(previous) = previous {
            self.bindings.remove(&previous.element);
            if kind == ColumnKind::List && next.map(|n| n.2) != Some(previous.node.key) {
                self.row_measurer.remove(&previous.node.key);
            }
        }
        if let Some((element, measured, key)) = next {
            match kind {
                ColumnKind::List => {
                    self.bindings.insert(element, Binding::SyncedScroll);
                    self.row_measurer.enqueue_measure(key, measured);
                }
                ColumnKind::SpanList => {
                    self.bindings.insert(element, Binding::Wheel);
                }
            }
        }
    }

    /// Registers the span bar of row slot `index`.
    pub fn register_span_bar_ref(&mut self, index: usize, bar: Option<SpanRef>) {
        self.rows.slot_mut(index).span_bar = bar;
    }

    /// Registers a bar of row slot `index` that only follows its start timestamp.
    pub fn register_invisible_bar_ref(&mut self, index: usize, bar: Option<SpanRef>) {
        self.rows.slot_mut(index).invisible_bar = bar;
    }

    /// Registers the off-screen arrow of row slot `index`.
    pub fn register_arrow_ref(&mut self, index: usize, arrow: Option<SpanRef>) {
        self.rows.slot_mut(index).arrow = arrow.map(|arrow| ArrowSlot {
            element: arrow.element,
            space: arrow.space,
            visible: false,
            side: ArrowSide::Left,
        });
    }

    /// Registers the span label of row slot `index`.
    pub fn register_span_text_ref(&mut self, index: usize, text: Option<SpanTextRef<'_>>) {
        let slot = self.rows.slot_mut(index);
        match text {
            Some(text) => slot.set_text(text.element, text.text, text.space),
            None => slot.text = None,
        }
    }

    /// Registers timeline indicator slot `index`.
    ///
    /// Wheel input over the marker drives the timeline; its label is queued
    /// for measurement.
    pub fn register_indicator_ref(&mut self, index: usize, indicator: Option<IndicatorRef>) {
        if index >= self.indicators.len() {
            self.indicators.resize_with(index + 1, || None);
        }
        if let Some(previous) = self.indicators[index].take() {
            self.bindings.remove(&previous.element);
            self.indicator_label_measurer.remove(&previous.indicator.key);
        }
        if let Some(indicator) = &indicator {
            self.bindings.insert(indicator.element, Binding::Wheel);
            if let Some(label) = indicator.label {
                self.indicator_label_measurer
                    .enqueue_measure(indicator.indicator.key, label);
            }
        }
        self.indicators[index] = indicator;
    }

    /// Registers timeline ruler tick slot `index`.
    pub fn register_timeline_tick_ref(&mut self, index: usize, tick: Option<ElementId>) {
        if index >= self.timeline_ticks.len() {
            self.timeline_ticks.resize(index + 1, None);
        }
        self.timeline_ticks[index] = tick;
    }

    /// Registers the column divider; pressing it starts a resize drag.
    pub fn register_divider_ref(&mut self, divider: Option<ElementId>) {
        if let Some(previous) = self.divider.take() {
            self.bindings.remove(&previous);
            self.divider_drag.cancel();
            self.column_preview = None;
            self.user_select = true;
        }
        if let Some(divider) = divider {
            self.bindings.insert(divider, Binding::DividerDrag);
        }
        self.divider = divider;
    }

    /// Registers the overlay holding timeline indicators.
    pub fn register_indicator_container_ref(&mut self, container: Option<ElementId>) {
        self.indicator_container = container;
    }

    /// Registers the horizontal fake scrollbar under the list column.
    pub fn register_horizontal_scrollbar_ref(&mut self, scrollbar: Option<ScrollbarRef>) {
        if let Some(previous) = self.scrollbar.take() {
            self.bindings.remove(&previous.element);
        }
        if let Some(scrollbar) = scrollbar {
            self.bindings.insert(scrollbar.element, Binding::ScrollbarScroll);
        }
        self.scrollbar = scrollbar;
    }

    /// Registers the container and starts observing its size, or with `None`
    /// tears the manager down: bindings are dropped, animations and timers
    /// cancelled and resize notifications ignored from then on.
    pub fn register_container_ref(&mut self, container: Option<ElementId>) {
        match container {
            Some(element) => {
                if self.observing && self.container != Some(element) {
                    log::debug!("replacing container {:?}", self.container);
                    self.divider_drag.cancel();
                    self.column_preview = None;
                }
                self.container = Some(element);
                self.observing = true;
                log::debug!("container {element:?} registered");
            }
            None => self.teardown(),
        }
    }

    fn teardown(&mut self) {
        self.bindings.clear();
        self.zoom_animation.cancel();
        self.row_scroll_animation.cancel();
        self.wheel_end.cancel();
        self.scroll_end.cancel();
        self.divider_drag.cancel();
        self.column_preview = None;
        self.scrolling_source = None;
        self.scrollbar_sync_pending = false;
        self.pending_reveal = None;
        self.pointer_events = true;
        self.user_select = true;
        self.rows.clear();
        self.indicators.clear();
        self.timeline_ticks.clear();
        self.divider = None;
        self.scrollbar = None;
        self.indicator_container = None;
        self.container = None;
        self.observing = false;
        log::debug!("view manager torn down");
    }

    /// Container resize notification.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty while the container is observed; the
    /// manager would otherwise keep drawing against stale dimensions.
    pub fn on_container_resize(&mut self, entries: &[ResizeEntry]) {
        if !self.observing {
            return;
        }
        let Some(entry) = entries.first() else {
            panic!("resize notification without an entry");
        };
        if let Err(err) = self.initialize_physical_space(entry.width, entry.height) {
            log::warn!("ignoring container size: {err}");
            return;
        }
        if let Some(list) = &mut self.list {
            list.set_viewport_height(entry.height);
        }
        self.redraw();
    }

    /// Attaches (or detaches) the vertically virtualized list.
    ///
    /// Dispatches [`VirtualizedListInit`] when a list is attached.
    pub fn register_list(&mut self, list: Option<VirtualizedList>) {
        let attached = list.is_some();
        self.list = list;
        if attached {
            self.events.dispatch::<VirtualizedListInit>(&());
        }
    }

    /// Attaches a list of `len` rows of the configured row height.
    pub fn attach_list(&mut self, len: usize, viewport_height: f64) {
        let model = FixedExtentModel::new(len, self.config.row_height);
        self.register_list(Some(VirtualizedList::new(model, viewport_height)));
    }

    /// Resizes the attached list to the tree's current row count, e.g. after
    /// a node was expanded or collapsed.
    pub fn sync_row_count<T: TraceTreeSource + ?Sized>(&mut self, tree: &T) {
        if let Some(list) = &mut self.list {
            list.model_mut().set_len(tree.len());
            list.set_scroll_top(list.scroll_top());
        }
    }

    /// The vertical scrollbar width changed; the divider, the indicator
    /// overlay and the fake scrollbar content compensate for it.
    pub fn on_scrollbar_width_change(&mut self, width: f64) {
        if width == self.vertical_scrollbar_width {
            return;
        }
        self.vertical_scrollbar_width = width;
        let max = self.row_measurer.max();
        if max > 0.0 {
            self.sync_scrollbar_content_width(max);
        }
        self.redraw();
    }

    // --- Commands ---------------------------------------------------------

    /// Scrolls the attached list so that row `index` is shown per `anchor`.
    pub fn scroll_to_row(&mut self, index: usize, anchor: ScrollAnchor) -> Option<f64> {
        self.list.as_mut()?.scroll_to_row(index, anchor)
    }

    /// Animates the view to `space` (absolute `[start, width]`).
    ///
    /// Widths below the minimum zoom precision are expanded about their
    /// centre. The duration grows with the logarithm of the change and is
    /// clamped to `[200, 600]` ms, counted from the next [`tick`](Self::tick).
    /// A running zoom animation is replaced.
    pub fn on_zoom_into_space(&mut self, space: Extent) {
        if self.trace_view.is_degenerate() {
            log::trace!("zoom ignored, trace view is degenerate");
            return;
        }
        let min = self.config.min_zoom_precision;
        let mut x = space.start - self.origin;
        let mut width = space.width;
        if width < min {
            x -= (min - width) / 2.0;
            width = min;
        }

        let dx = x - self.trace_view.x;
        let dw = self.trace_view.width - width;
        let max_distance = dx.abs().max(dw.abs());
        let p = if max_distance != 0.0 {
            math::log10(max_distance)
        } else {
            1.0
        };
        let duration = (200.0 + 70.0 * p.abs()).clamp(200.0, 600.0);

        log::debug!("zooming into [{x}, {width}] over {duration}ms");
        self.zoom_animation.start(Tween::deferred(
            [self.trace_view.x, self.trace_view.width],
            [x, width],
            duration,
        ));
    }

    /// Animates back to the full trace.
    pub fn reset_zoom(&mut self) {
        self.on_zoom_into_space(Extent::new(self.origin, self.trace_space.width));
    }

    /// Centres `space` (absolute) in the view without changing the zoom level.
    pub fn on_bring_row_into_view(&mut self, space: Extent) {
        if self.zoom_animation.cancel().is_some() {
            log::trace!("bring into view cancelled zoom animation");
        }
        if space.start - self.origin == self.trace_view.x {
            return;
        }
        let width = self.trace_view.width;
        self.on_zoom_into_space(Extent::new(space.center() - width / 2.0, width));
    }

    /// Immediately fits `space` (absolute) with a fifth of its width as
    /// margin on either side. Zero-width spans keep the current view width.
    pub fn animate_view_to(&mut self, space: Extent) {
        self.zoom_animation.cancel();
        let width = if space.width > 0.0 {
            space.width
        } else {
            self.trace_view.width
        };
        let margin = 0.2 * width;
        self.set_trace_view(ViewUpdate::new(
            space.start - margin - self.origin,
            width + 2.0 * margin,
        ));
        self.redraw();
    }

    /// Scrolls the list column so that `node`'s indentation sits `offset` px
    /// from the left edge, over `duration` ms (immediately when `<= 0`).
    pub fn scroll_row_into_view_horizontally(
        &mut self,
        node: &NodeRef,
        duration: f64,
        offset: f64,
        mode: RevealMode,
    ) {
        let target = -(node.depth as f64) * self.config.row_depth_padding + offset;
        let target = match mode {
            RevealMode::Exact => target,
            RevealMode::Measured => self.clamp_row_transform(target),
        };
        self.animate_scroll_column_to(target, duration);
    }

    fn animate_scroll_column_to(&mut self, x: f64, duration: f64) {
        if duration <= 0.0 {
            self.row_scroll_animation.cancel();
            self.columns.list.translate_x = x;
            self.scroll_left = -x;
            self.redraw();
            return;
        }
        self.row_scroll_animation.start(Tween::deferred(
            [self.columns.list.translate_x],
            [x],
            duration,
        ));
    }

    /// Scrolls row `index` into view vertically per `anchor`, then reveals
    /// its indentation if it is off-screen.
    ///
    /// Unmeasured rows are revealed once their width arrives. Repeating the
    /// request for the node scrolled to last is ignored unless `force` is set.
    pub fn scroll_row_into_view(
        &mut self,
        node: &NodeRef,
        index: usize,
        anchor: ScrollAnchor,
        force: bool,
    ) {
        if !force && self.last_scrolled_node == Some(node.key) {
            return;
        }
        self.scroll_to_row(index, anchor);
        self.last_scrolled_node = Some(node.key);

        self.drain_row_measurer();
        if !self.row_measurer.contains(&node.key) {
            self.pending_reveal = Some(node.clone());
            return;
        }
        if self.is_outside_of_view_on_key_down(node) {
            self.scroll_row_into_view_horizontally(
                node,
                0.0,
                self.config.reveal_offset_px,
                RevealMode::Measured,
            );
        }
    }

    /// Scrolls the search match at `iterator_index` into view.
    ///
    /// Returns `false` if there is no such match.
    pub fn reveal_search_result(&mut self, results: &SearchResults, iterator_index: usize) -> bool {
        let Some(found) = results.matches.get(iterator_index) else {
            return false;
        };
        let node = found.node.clone();
        self.scroll_row_into_view(&node, found.index, ScrollAnchor::CenterIfOutside, false);
        true
    }

    // --- Queries ----------------------------------------------------------

    /// Returns `true` if `node`'s indentation is scrolled off the left edge
    /// or past the middle of the list column. Unmeasured nodes are never outside.
    #[must_use]
    pub fn is_outside_of_view_on_key_down(&self, node: &NodeRef) -> bool {
        if !self.row_measurer.contains(&node.key) {
            return false;
        }
        let indent =
            self.columns.list.translate_x + node.depth as f64 * self.config.row_depth_padding;
        let list = self.columns.list.width * self.container_physical_space.width;
        indent < 0.0 || indent > list / 2.0
    }

    /// Trace-space offset under physical pixel `px`.
    #[must_use]
    pub fn config_space_cursor(&self, px: f64) -> f64 {
        self.projection.cursor_to_time(px)
    }

    /// Physical pixel offset of absolute timestamp `ts`.
    #[must_use]
    pub fn transform_x_from_timestamp(&self, ts: f64) -> f64 {
        self.projection.transform_x(ts)
    }

    /// Matrix for a span bar covering `space` (absolute).
    #[must_use]
    pub fn compute_span_matrix(&self, space: Extent) -> SpanMatrix {
        span_matrix(&self.projection, space)
    }

    /// Label placement for `text` on a span covering `space` (absolute).
    pub fn compute_span_text_placement(&mut self, space: Extent, text: &str) -> PlacedText {
        let width = self.text_measurer.measure(text, &self.metrics);
        place_span_text(&self.projection, space, width, self.config.text_padding)
    }

    /// Clamps a list column translate to the scrollable range.
    ///
    /// Pending row measurements are drained first. The range is
    /// `[-(widest row - column width + padding), 0]`, collapsing to `0` when
    /// every measured row fits.
    pub fn clamp_row_transform(&mut self, transform: f64) -> f64 {
        self.drain_row_measurer();
        let max = self.row_measurer.max();
        let column = self.columns.list.width * self.container_physical_space.width;
        if max < column || transform > 0.0 {
            return 0.0;
        }
        let bound = -(max - column + self.config.row_padding_px);
        transform.max(bound)
    }

    // --- Frame loop -------------------------------------------------------

    /// Advances timers and animations to `now` (milliseconds).
    ///
    /// Animations and settle timers started since the previous tick begin
    /// counting at `now`, so a host may stop ticking while idle. Returns
    /// `true` while another tick is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = self.drain_row_measurer();
        changed |= self.indicator_label_measurer.drain(&self.metrics).measured > 0;

        if self.wheel_end.poll(now) {
            self.pointer_events = true;
            changed = true;
        }

        // May start a row animation, which is anchored below.
        if self.scroll_end.poll(now) {
            self.on_scroll_end_out_of_bounds_check();
            changed = true;
        }

        if let Some(tween) = self.zoom_animation.get_mut() {
            tween.anchor(now);
            let sample = tween.sample(now);
            if sample.done {
                self.zoom_animation.cancel();
            }
            let [x, width] = sample.values;
            self.set_trace_view(ViewUpdate::new(x, width));
            changed = true;
        }

        if let Some(tween) = self.row_scroll_animation.get_mut() {
            tween.anchor(now);
            let sample = tween.sample(now);
            if sample.done {
                self.row_scroll_animation.cancel();
            }
            let [x] = sample.values;
            self.columns.list.translate_x = x;
            self.scroll_left = -x;
            changed = true;
        }

        if core::mem::take(&mut self.scrollbar_sync_pending) {
            self.scroll_left = -math::round_half_up(self.columns.list.translate_x);
            changed = true;
        }

        if changed {
            self.redraw();
        }

        self.zoom_animation.is_active()
            || self.row_scroll_animation.is_active()
            || self.wheel_end.is_pending()
            || self.scroll_end.is_pending()
            || self.row_measurer.queue_len() > 0
            || self.indicator_label_measurer.queue_len() > 0
    }

    fn enqueue_scroll_end_check(&mut self) {
        self.scroll_end.arm();
    }

    /// Once scrolling settles, brings the shallowest rendered row back into
    /// view if all rows scrolled out or its indentation is past the column.
    fn on_scroll_end_out_of_bounds_check(&mut self) {
        self.scrolling_source = None;
        if self.row_scroll_animation.is_active() {
            return;
        }

        let edge = self.config.out_of_bounds_edge_rows;
        let mut max = 0.0_f64;
        let mut shallowest: Option<&NodeRef> = None;
        for index in edge..self.rows.len().saturating_sub(edge) {
            let Some(node) = self.rows.list_node(index) else {
                continue;
            };
            let Some(width) = self.row_measurer.get(&node.key) else {
                continue;
            };
            max = max.max(width);
            if shallowest.is_none_or(|s| node.depth < s.depth) {
                shallowest = Some(node);
            }
        }
        let Some(node) = shallowest.cloned() else {
            return;
        };

        let translation = self.columns.list.translate_x;
        let list = self.columns.list.width * self.container_physical_space.width;
        let indent = translation + node.depth as f64 * self.config.row_depth_padding;
        if translation + max < 0.0 || indent > list {
            self.scroll_row_into_view_horizontally(
                &node,
                self.config.scroll_into_view_duration_ms,
                0.0,
                RevealMode::Measured,
            );
        }
    }

    /// Measures queued rows; returns `true` if any width arrived.
    fn drain_row_measurer(&mut self) -> bool {
        let report = self.row_measurer.drain(&self.metrics);
        if let Some(max) = report.max_changed {
            self.sync_scrollbar_content_width(max);
        }
        if report.measured == 0 {
            return false;
        }
        if let Some(node) = self.pending_reveal.take() {
            if self.is_outside_of_view_on_key_down(&node) {
                self.scroll_row_into_view_horizontally(
                    &node,
                    0.0,
                    self.config.reveal_offset_px,
                    RevealMode::Measured,
                );
            }
        }
        true
    }

    fn sync_scrollbar_content_width(&mut self, max: f64) {
        self.scrollbar_content_width = math::round_half_up(
            max - self.vertical_scrollbar_width + self.config.row_padding_px,
        );
    }

    /// Recomputes every style and returns the frame.
    pub fn draw(&mut self) -> &Frame {
        self.redraw();
        &self.frame
    }

    fn redraw(&mut self) {
        let Self {
            config,
            metrics,
            projection,
            intervals,
            columns,
            column_preview,
            rows,
            indicators,
            timeline_ticks,
            container_physical_space,
            divider,
            indicator_container,
            scrollbar,
            indicator_label_measurer,
            text_measurer,
            vertical_scrollbar_width,
            scroll_left,
            scrollbar_content_width,
            pointer_events,
            user_select,
            frame,
            ..
        } = self;

        let (list_width, span_width) =
            column_preview.unwrap_or((columns.list.width, columns.span_list.width));
        let container = container_physical_space.width;
        let scrollbar_width = *vertical_scrollbar_width;

        frame.list_column_width = math::round_to(list_width, 1000.0);
        frame.span_column_width = math::round_to(span_width, 1000.0);
        frame.pointer_events = *pointer_events;
        frame.user_select = *user_select;
        frame.list_translate_x = columns.list.translate_x;

        frame.divider = divider.map(|element| DividerStyle {
            element,
            width: config.divider_width,
            translate_x: math::round_to(
                list_width * (container - scrollbar_width) - config.divider_width / 2.0 - 1.0,
                10.0,
            ),
        });
        frame.indicator_container = indicator_container.map(|element| {
            let compensation = if container > 0.0 {
                scrollbar_width / container * span_width
            } else {
                0.0
            };
            IndicatorContainerStyle {
                element,
                translate_x: -scrollbar_width,
                width_percent: (span_width - compensation) * 100.0,
            }
        });
        frame.horizontal_scrollbar = scrollbar.map(|scrollbar| ScrollbarStyle {
            element: scrollbar.element,
            content: scrollbar.content,
            content_width: *scrollbar_content_width,
            scroll_left: *scroll_left,
            width_percent: list_width * 100.0,
        });

        frame.clear_rows();
        let origin = projection.origin();
        let view = *projection.view();

        for (row, slot) in rows.iter_mut() {
            if let Some(cell) = &slot.list {
                frame.list_rows.push(ListRowStyle {
                    row,
                    element: cell.content.unwrap_or(cell.element),
                    translate_x: columns.list.translate_x,
                });
            }
            if let Some(bar) = &slot.span_bar {
                frame.span_bars.push(SpanBarStyle {
                    row,
                    element: bar.element,
                    transform: span_matrix(projection, bar.space),
                });
            }
            if let Some(text) = &slot.text {
                let width = text_measurer.measure(&text.text, &*metrics);
                let placed = place_span_text(projection, text.space, width, config.text_padding);
                frame.span_texts.push(SpanTextStyle {
                    row,
                    element: text.element,
                    placement: placed.placement,
                    translate_x: placed.x,
                });

                if let (Some(arrow), Some(_)) = (&mut slot.arrow, &slot.span_bar) {
                    let space = arrow.space.relative_to(origin);
                    let outside_left = space.end() < view.left();
                    let outside_right = space.start > view.right();
                    arrow.visible = outside_left || outside_right;
                    arrow.side = if outside_left {
                        ArrowSide::Left
                    } else {
                        ArrowSide::Right
                    };
                    frame.arrows.push(ArrowStyle {
                        row,
                        element: arrow.element,
                        visible: arrow.visible,
                        side: arrow.side,
                    });
                }
            }
            if let Some(bar) = &slot.invisible_bar {
                frame.invisible_bars.push(InvisibleBarStyle {
                    row,
                    element: bar.element,
                    translate_x: projection.transform_x(bar.space.start),
                });
            }
        }

        let physical = projection.physical().width;
        if !indicators.is_empty() {
            // Visible range plus one neighbour on either side.
            let len = indicators.len();
            let mut start = 0;
            while start + 1 < len {
                match &indicators[start] {
                    Some(entry) if entry.indicator.start - origin >= view.left() => break,
                    _ => start += 1,
                }
            }
            let mut end = len;
            while end > start {
                match &indicators[end - 1] {
                    Some(entry) if entry.indicator.start - origin <= view.right() => break,
                    _ => end -= 1,
                }
            }
            let start = start.saturating_sub(1);
            let end = end.min(len - 1);

            let max = physical + 1.0;
            for (index, entry) in indicators.iter().enumerate() {
                let Some(entry) = entry else { continue };
                let raw = projection.transform_x(entry.indicator.start);
                let visible = (start..=end).contains(&index);
                let label_offset = entry
                    .label
                    .and_then(|_| indicator_label_measurer.get(&entry.indicator.key))
                    .map(|label_width| indicator_label_offset(raw, label_width, physical));
                frame.indicators.push(IndicatorStyle {
                    index,
                    element: entry.element,
                    label: entry.label,
                    visible,
                    translate_x: raw.clamp(-1.0, max),
                    label_offset,
                    z_index: if index == start || index == end { 1 } else { 2 },
                });
            }
        }

        let empty = intervals.is_empty_timeline();
        let mut written = 0;
        for (index, element) in timeline_ticks.iter().enumerate() {
            let Some(element) = *element else { continue };
            let tick = frame.tick_mut(written);
            written += 1;
            tick.index = index;
            tick.element = element;
            tick.label.clear();
            if empty && index < 2 {
                tick.visible = true;
                tick.line_visible = index == 0;
                tick.translate_x = if index == 0 {
                    0.0
                } else {
                    physical - EMPTY_TIMELINE_LABEL_OFFSET
                };
                write_tick_label(&mut tick.label, 0.0);
            } else if let Some(value) = intervals.get(index) {
                tick.visible = true;
                tick.line_visible = true;
                tick.translate_x = projection.transform_x(origin + value);
                write_tick_label(&mut tick.label, value);
            } else {
                tick.visible = false;
                tick.line_visible = false;
                tick.translate_x = 0.0;
            }
        }
        frame.timeline.truncate(written);
    }

    /// The last drawn frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    // --- Accessors --------------------------------------------------------

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Layout metrics, mutable (e.g. after a host relayout).
    pub fn metrics_mut(&mut self) -> &mut M {
        &mut self.metrics
    }

    /// Absolute timestamp of the trace start.
    #[must_use]
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Full trace extent, origin-relative.
    #[must_use]
    pub fn trace_space(&self) -> &View {
        &self.trace_space
    }

    /// Currently visible window of the trace.
    #[must_use]
    pub fn trace_view(&self) -> &View {
        &self.trace_view
    }

    /// Pixel extent of the timeline.
    #[must_use]
    pub fn trace_physical_space(&self) -> &View {
        &self.trace_physical_space
    }

    /// Pixel extent of the whole container.
    #[must_use]
    pub fn container_physical_space(&self) -> &View {
        &self.container_physical_space
    }

    /// Cached pixel mapping.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Timeline ruler ticks for the current view.
    #[must_use]
    pub fn intervals(&self) -> &TimelineIntervals {
        &self.intervals
    }

    /// Committed column split.
    #[must_use]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Attached list, if any.
    #[must_use]
    pub fn list(&self) -> Option<&VirtualizedList> {
        self.list.as_ref()
    }

    /// Attached list, mutable.
    pub fn list_mut(&mut self) -> Option<&mut VirtualizedList> {
        self.list.as_mut()
    }

    /// Row width measurer.
    #[must_use]
    pub fn row_measurer(&self) -> &WidthMeasurer<NodeKey, ElementId> {
        &self.row_measurer
    }

    /// Row width measurer, mutable (for subscribing to its notifications).
    pub fn row_measurer_mut(&mut self) -> &mut WidthMeasurer<NodeKey, ElementId> {
        &mut self.row_measurer
    }

    /// Event registry.
    #[must_use]
    pub fn events(&self) -> &ViewEvents {
        &self.events
    }

    /// Event registry, mutable.
    pub fn events_mut(&mut self) -> &mut ViewEvents {
        &mut self.events
    }

    /// Gesture role bound to `element`.
    #[must_use]
    pub fn binding(&self, element: ElementId) -> Option<Binding> {
        self.bindings.get(&element).copied()
    }

    /// Input currently driving the list column scroll.
    #[must_use]
    pub fn scrolling_source(&self) -> Option<ScrollSource> {
        self.scrolling_source
    }

    /// Shared list column translate.
    #[must_use]
    pub fn list_translate_x(&self) -> f64 {
        self.columns.list.translate_x
    }

    /// Scroll position for the fake scrollbar.
    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Width of the fake scrollbar's content.
    #[must_use]
    pub fn scrollbar_content_width(&self) -> f64 {
        self.scrollbar_content_width
    }

    /// Returns `true` while a zoom animation runs.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zoom_animation.is_active()
    }

    /// Returns `true` while a horizontal row scroll animation runs.
    #[must_use]
    pub fn is_scrolling_row(&self) -> bool {
        self.row_scroll_animation.is_active()
    }

    /// Returns `true` while the divider is dragged.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.divider_drag.is_active()
    }

    /// Returns `true` while the container size is observed.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }
}

fn write_tick_label(label: &mut String, millis: f64) {
    let written = write_duration(label, millis, 2);
    debug_assert!(written.is_ok(), "writing to a String cannot fail");
}

/// Label offset relative to an indicator marker at `transform` px.
///
/// Labels centre on their marker, shifting inwards near the timeline edges
/// and flipping sides once the marker is off-screen.
fn indicator_label_offset(transform: f64, label_width: f64, physical: f64) -> f64 {
    let half = label_width / 2.0;
    if transform < -1.0 {
        return INDICATOR_LABEL_PADDING;
    }
    if transform >= physical + 1.0 {
        return -label_width - INDICATOR_LABEL_PADDING;
    }
    let spill_left = transform - INDICATOR_LABEL_PADDING - half;
    let spill_right = transform + half;
    if spill_left < 0.0 {
        -half + spill_left.abs() - 1.0
    } else if spill_right > physical {
        -half - (spill_right - physical) - 1.0
    } else {
        -half
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;
    use kurbo::{Point, Vec2};
    use spanscope_event_state::wheel::{Modifiers, WheelInput};
    use spanscope_measure::{ElementMetrics, GlyphMetrics};
    use spanscope_space::Extent;

    use super::{ViewManager, ViewUpdate, indicator_label_offset};
    use crate::config::ViewConfig;
    use crate::element::{ElementId, ResizeEntry};

    #[derive(Default)]
    struct Widths(HashMap<ElementId, f64>);

    impl ElementMetrics<ElementId> for Widths {
        fn element_width(&self, element: &ElementId) -> Option<f64> {
            self.0.get(element).copied()
        }
    }

    impl GlyphMetrics for Widths {
        fn glyph_advance(&self, _: char) -> f64 {
            7.0
        }
    }

    fn manager() -> ViewManager<Widths> {
        let mut m = ViewManager::new(0.5, 0.5, ViewConfig::default(), Widths::default()).unwrap();
        m.initialize_trace_space(0.0, 1000.0, 1.0).unwrap();
        m.initialize_physical_space(1000.0, 600.0).unwrap();
        m
    }

    #[test]
    fn width_is_clamped_before_x() {
        let mut m = manager();
        m.set_trace_view(ViewUpdate::new(900.0, 200.0));
        assert_eq!((m.trace_view().x, m.trace_view().width), (800.0, 200.0));

        m.set_trace_view(ViewUpdate::width(0.01));
        assert_eq!(m.trace_view().width, 1.0);

        m.set_trace_view(ViewUpdate::new(-50.0, 5000.0));
        assert_eq!((m.trace_view().x, m.trace_view().width), (0.0, 1000.0));

        m.set_trace_view(ViewUpdate::x(f64::NAN));
        assert_eq!(m.trace_view().x, 0.0);
    }

    #[test]
    fn degenerate_view_ignores_mutation() {
        let mut m = ViewManager::new(0.5, 0.5, ViewConfig::default(), Widths::default()).unwrap();
        m.initialize_trace_space(0.0, 0.0, 0.0).unwrap();
        m.initialize_physical_space(1000.0, 600.0).unwrap();
        m.set_trace_view(ViewUpdate::new(10.0, 10.0));
        assert!(m.trace_view().is_degenerate());
        assert!(m.intervals().is_empty_timeline());

        m.on_zoom_into_space(Extent::new(0.0, 5.0));
        assert!(!m.is_zooming());
    }

    #[test]
    fn pan_moves_by_physical_share() {
        let mut m = manager();
        m.set_trace_view(ViewUpdate::new(100.0, 200.0));
        m.register_column_ref(
            crate::ColumnKind::SpanList,
            0,
            Some(crate::ColumnRef {
                element: ElementId(9),
                content: None,
                node: crate::NodeRef::new(crate::NodeKey(1), 0, Extent::new(0.0, 1.0)),
            }),
        );
        // 50px of a 500px timeline is a tenth of the view.
        let input = WheelInput::new(Vec2::new(50.0, 0.0), Point::ZERO);
        assert!(m.route_wheel(ElementId(9), input));
        assert!((m.trace_view().x - 120.0).abs() < 1e-9);
        assert!(!m.frame().pointer_events);

        // The settle window opens at the first frame after the event.
        m.tick(1_000.0);
        assert!(!m.frame().pointer_events);
        m.tick(1_250.0);
        assert!(m.frame().pointer_events);
    }

    #[test]
    fn zoom_keeps_cursor_anchor() {
        let mut m = manager();
        m.set_trace_view(ViewUpdate::new(100.0, 200.0));
        m.register_column_ref(
            crate::ColumnKind::SpanList,
            0,
            Some(crate::ColumnRef {
                element: ElementId(9),
                content: None,
                node: crate::NodeRef::new(crate::NodeKey(1), 0, Extent::new(0.0, 1.0)),
            }),
        );
        let before = m.config_space_cursor(250.0);
        let input = WheelInput::new(Vec2::new(0.0, -50.0), Point::new(250.0, 0.0))
            .with_modifiers(Modifiers::META);
        assert!(m.route_wheel(ElementId(9), input));
        assert!((m.trace_view().width - 100.0).abs() < 1e-9);
        assert!((m.config_space_cursor(250.0) - before).abs() < 1e-9);
    }

    #[test]
    fn label_offset_shifts_near_edges() {
        assert_eq!(indicator_label_offset(-5.0, 40.0, 500.0), 2.0);
        assert_eq!(indicator_label_offset(501.0, 40.0, 500.0), -42.0);
        assert_eq!(indicator_label_offset(250.0, 40.0, 500.0), -20.0);
        // 10 - 2 - 20 = -12 spills left.
        assert_eq!(indicator_label_offset(10.0, 40.0, 500.0), -20.0 + 12.0 - 1.0);
        // 490 + 20 = 510 spills right.
        assert_eq!(indicator_label_offset(490.0, 40.0, 500.0), -20.0 - 10.0 - 1.0);
    }

    #[test]
    #[should_panic(expected = "resize notification without an entry")]
    fn resize_without_entry_panics() {
        let mut m = manager();
        m.register_container_ref(Some(ElementId(1)));
        m.on_container_resize(&[]);
    }

    #[test]
    fn resize_is_ignored_after_teardown() {
        let mut m = manager();
        m.register_container_ref(Some(ElementId(1)));
        m.on_container_resize(&[ResizeEntry::new(800.0, 400.0)]);
        assert_eq!(m.trace_physical_space().width, 400.0);

        m.register_container_ref(None);
        m.on_container_resize(&[]);
        assert!(!m.is_observing());
        assert_eq!(m.trace_physical_space().width, 400.0);
    }
}

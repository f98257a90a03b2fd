// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use spanscope_event_state::wheel::Modifiers;

/// Tunables for a [`ViewManager`](crate::ViewManager).
///
/// All lengths are physical pixels, all durations milliseconds, and all
/// trace quantities are in the trace's own time unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    /// Smallest view width a zoom may reach.
    pub min_zoom_precision: f64,
    /// Slack added past the widest row when clamping the list column scroll.
    pub row_padding_px: f64,
    /// Indentation per tree depth level.
    pub row_depth_padding: f64,
    /// Height of one row.
    pub row_height: f64,
    /// Width of the column divider.
    pub divider_width: f64,
    /// Quiet period after the last wheel event before pointer events resume.
    pub wheel_end_debounce_ms: f64,
    /// Quiet period after the last list scroll before the out-of-bounds check runs.
    pub scroll_end_debounce_ms: f64,
    /// Desired distance between timeline ticks.
    pub interval_spacing_px: f64,
    /// Host device pixel ratio; scales the tick spacing.
    pub device_pixel_ratio: f64,
    /// Number of timeline tick slots kept in the reusable buffer.
    pub max_interval_count: usize,
    /// Wheel delta to scale factor: `scale = 1 + delta_y * wheel_zoom_factor`.
    pub wheel_zoom_factor: f64,
    /// Modifier that turns wheel input over the timeline into zoom.
    pub zoom_modifier: Modifiers,
    /// Gap between a span bar and its label.
    pub text_padding: f64,
    /// Default duration of the horizontal row reveal animation.
    pub scroll_into_view_duration_ms: f64,
    /// Rows skipped at both ends of the rendered window by the out-of-bounds check.
    pub out_of_bounds_edge_rows: usize,
    /// Narrowest fraction either column may be resized to.
    pub min_column_width: f64,
    /// Relative tolerance used to decide the view spans the whole trace.
    pub full_view_tolerance: f64,
    /// Extra offset applied when revealing a row's indentation from the keyboard.
    pub reveal_offset_px: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_zoom_precision: 1.0,
            row_padding_px: 16.0,
            row_depth_padding: 22.0,
            row_height: 24.0,
            divider_width: 6.0,
            wheel_end_debounce_ms: 200.0,
            scroll_end_debounce_ms: 300.0,
            interval_spacing_px: 100.0,
            device_pixel_ratio: 1.0,
            max_interval_count: 120,
            wheel_zoom_factor: 0.01,
            zoom_modifier: Modifiers::META,
            text_padding: 2.0,
            scroll_into_view_duration_ms: 600.0,
            out_of_bounds_edge_rows: 5,
            min_column_width: 0.05,
            full_view_tolerance: 1e-9,
            reveal_offset_px: 48.0,
        }
    }
}

impl ViewConfig {
    /// Sets the device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Sets the zoom modifier, e.g. [`Modifiers::CTRL`] on platforms without a meta key.
    #[must_use]
    pub fn with_zoom_modifier(mut self, modifier: Modifiers) -> Self {
        self.zoom_modifier = modifier;
        self
    }

    /// Sets the smallest zoomable duration.
    #[must_use]
    pub fn with_min_zoom_precision(mut self, precision: f64) -> Self {
        self.min_zoom_precision = precision;
        self
    }

    /// Sets the number of timeline tick slots.
    #[must_use]
    pub fn with_max_interval_count(mut self, count: usize) -> Self {
        self.max_interval_count = count;
        self
    }
}

// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where span bars and their labels go.

use spanscope_space::{Extent, Projection};

/// Where a span label is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextPlacement {
    /// Left of the bar, outside it.
    OutsideLeft,
    /// Inside the bar, against its left edge.
    InsideLeft,
    /// Right of the bar, outside it.
    OutsideRight,
    /// Inside the bar, against its right edge.
    InsideRight,
    /// Inside the bar, pinned to the left edge of the visible window.
    WindowLeft,
    /// Inside the bar, pinned to the right edge of the visible window.
    WindowRight,
}

impl TextPlacement {
    /// Returns `true` if the label is drawn over the bar (hosts switch to a
    /// contrasting text colour).
    #[must_use]
    pub fn is_inside(self) -> bool {
        !matches!(self, Self::OutsideLeft | Self::OutsideRight)
    }
}

/// A label placement and its pixel offset from the timeline's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedText {
    /// Anchor.
    pub placement: TextPlacement,
    /// Horizontal offset in pixels.
    pub x: f64,
}

/// CSS-style `matrix(a, b, c, d, e, f)` for a span bar, and its inverse X scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpanMatrix {
    /// `[a, b, c, d, e, f]`.
    pub matrix: [f64; 6],
    /// `1 / a`, used to counter-scale bar decorations.
    pub inverse_scale: f64,
}

/// Matrix for a bar spanning `span` (absolute time).
///
/// The X scale is the span's share of the view, but never less than one
/// physical pixel, so that zero-length spans stay visible.
#[must_use]
pub fn span_matrix(projection: &Projection, span: Extent) -> SpanMatrix {
    let view = projection.view();
    let per_px = projection.time_per_px();
    let scale = if view.width > 0.0 {
        (span.width / view.width).max(per_px / view.width)
    } else {
        1.0
    };
    SpanMatrix {
        matrix: [scale, 0.0, 0.0, 1.0, projection.transform_x(span.start), 0.0],
        inverse_scale: 1.0 / scale,
    }
}

/// Chooses where the label of `span` (absolute time) goes.
///
/// `anchor_left` spans (starting in the last fifth of the trace) prefer
/// labels on their left so text does not run off the end of the timeline.
/// Labels of spans wider than the view are pinned to the window edge so they
/// stay readable while panning. Otherwise the label goes outside the bar on
/// the side with free room, falling back to the inside of the visible part.
#[must_use]
pub fn place_span_text(
    projection: &Projection,
    span: Extent,
    text_width: f64,
    padding: f64,
) -> PlacedText {
    use TextPlacement::*;

    let origin = projection.origin();
    let space = projection.space();
    let view = projection.view();
    let per_px = projection.time_per_px();
    let px = |t: f64| if per_px == 0.0 { 0.0 } else { t / per_px };

    let anchor_left = span.start > origin + space.width * 0.8;
    let at = |placement, x| PlacedText { placement, x };

    let right_outside = projection.transform_x(span.end()) + padding;
    let right_inside = projection.transform_x(span.end()) - text_width - padding;
    let left_outside = projection.transform_x(span.start) - padding - text_width;
    let left_inside = projection.transform_x(span.start) + padding;
    let window_right = projection.transform_x(origin + view.right()) - text_width - padding;
    let window_left = projection.transform_x(origin + view.left()) + padding;

    let span_left = span.start - origin;
    let span_right = span_left + span.width;
    let space_left = span_left - view.left();
    let space_right = view.right() - span_right;

    if span_right < view.left() {
        return if anchor_left {
            at(InsideRight, right_inside)
        } else {
            at(OutsideRight, right_outside)
        };
    }

    if span_left > view.right() {
        return if anchor_left {
            at(OutsideLeft, left_outside)
        } else {
            at(InsideLeft, left_inside)
        };
    }

    if span_left <= view.left() && span_right >= view.right() {
        return if anchor_left {
            at(WindowLeft, window_left)
        } else {
            at(WindowRight, window_right)
        };
    }

    if anchor_left {
        if space_left > 0.0 {
            return at(OutsideLeft, left_outside);
        }
        let visible = px(span_right - view.left()) - padding;
        if visible - padding >= text_width {
            return at(WindowLeft, window_left);
        }
        return at(InsideRight, right_inside);
    }

    if space_right > 0.0 {
        // Close to the end of the trace there may be no room outside.
        if span_right > space.right() * 0.9 && px(space_right) < text_width {
            return at(InsideRight, right_inside);
        }
        return at(OutsideRight, right_outside);
    }

    if px(span.width) > text_width {
        let hidden = span_right - view.right();
        let visible = px(span.width - hidden) - padding;
        if visible - padding >= text_width {
            return at(WindowRight, window_right);
        }
        return at(InsideLeft, left_inside);
    }

    at(OutsideRight, right_outside)
}

#[cfg(test)]
mod tests {
    use spanscope_space::{Extent, Projection, View};

    use super::{TextPlacement, place_span_text, span_matrix};

    const ORIGIN: f64 = 10_000.0;

    /// 1000 units of trace, viewing `[400, 600]` through 1000px: 0.2 units per px.
    fn zoomed() -> Projection {
        Projection::new(
            ORIGIN,
            View::new(0.0, 0.0, 1000.0, 1.0),
            View::new(400.0, 0.0, 200.0, 1.0),
            View::new(0.0, 0.0, 1000.0, 1.0),
        )
    }

    fn place(span: (f64, f64), width: f64) -> super::PlacedText {
        place_span_text(
            &zoomed(),
            Extent::new(ORIGIN + span.0, span.1),
            width,
            2.0,
        )
    }

    #[test]
    fn span_left_of_view_goes_outside_right() {
        let placed = place((100.0, 50.0), 40.0);
        assert_eq!(placed.placement, TextPlacement::OutsideRight);
        // (150 - 400) / 0.2 + 2
        assert!((placed.x - (-1248.0)).abs() < 1e-9);
        assert!(!placed.placement.is_inside());
    }

    #[test]
    fn span_right_of_view_goes_inside_left() {
        let placed = place((700.0, 50.0), 40.0);
        assert_eq!(placed.placement, TextPlacement::InsideLeft);
        assert!((placed.x - 1502.0).abs() < 1e-9);
    }

    #[test]
    fn late_span_mirrors_to_the_left() {
        let p = Projection::new(
            ORIGIN,
            View::new(0.0, 0.0, 1000.0, 1.0),
            View::new(0.0, 0.0, 500.0, 1.0),
            View::new(0.0, 0.0, 1000.0, 1.0),
        );
        let placed = place_span_text(&p, Extent::new(ORIGIN + 900.0, 50.0), 30.0, 2.0);
        assert_eq!(placed.placement, TextPlacement::OutsideLeft);
        assert!((placed.x - (1800.0 - 2.0 - 30.0)).abs() < 1e-9);
    }

    #[test]
    fn covering_span_is_pinned_to_window() {
        let placed = place((0.0, 1000.0), 40.0);
        assert_eq!(placed.placement, TextPlacement::WindowRight);
        assert!((placed.x - (1000.0 - 40.0 - 2.0)).abs() < 1e-9);
    }

    #[test]
    fn room_on_the_right_is_used_first() {
        let placed = place((450.0, 20.0), 40.0);
        assert_eq!(placed.placement, TextPlacement::OutsideRight);
        assert!((placed.x - (350.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn span_cut_by_right_edge_pins_or_falls_inside() {
        // Visible part is 100 units = 500px, plenty of room.
        let wide = place((500.0, 300.0), 40.0);
        assert_eq!(wide.placement, TextPlacement::WindowRight);

        // Visible part is 2 units = 10px, too narrow for the label.
        let narrow = place((598.0, 20.0), 40.0);
        assert_eq!(narrow.placement, TextPlacement::InsideLeft);
        assert!((narrow.x - (990.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn short_span_never_scales_below_a_pixel() {
        let m = span_matrix(&zoomed(), Extent::new(ORIGIN + 500.0, 0.0));
        assert!((m.matrix[0] - 0.2 / 200.0).abs() < 1e-15);
        assert!((m.matrix[4] - 500.0).abs() < 1e-9);
        assert!((m.inverse_scale * m.matrix[0] - 1.0).abs() < 1e-12);

        let m = span_matrix(&zoomed(), Extent::new(ORIGIN + 450.0, 100.0));
        assert!((m.matrix[0] - 0.5).abs() < 1e-12);
        assert!((m.matrix[4] - 250.0).abs() < 1e-9);
    }
}

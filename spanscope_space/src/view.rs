// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

use crate::SpaceError;

/// An interval of trace time, `[start, start + width]`.
///
/// Spans, zoom targets and node extents are all expressed as an `Extent`. The
/// start is usually an absolute timestamp; callers subtract the trace origin
/// before comparing against a [`View`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    /// Start of the interval.
    pub start: f64,
    /// Length of the interval. Zero for point-in-time events.
    pub width: f64,
}

impl Extent {
    /// Creates a new extent.
    #[must_use]
    pub const fn new(start: f64, width: f64) -> Self {
        Self { start, width }
    }

    /// End of the interval.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.start + self.width * 0.5
    }

    /// Returns the same extent moved by `-origin`.
    #[must_use]
    pub fn relative_to(&self, origin: f64) -> Self {
        Self::new(self.start - origin, self.width)
    }
}

impl From<[f64; 2]> for Extent {
    fn from([start, width]: [f64; 2]) -> Self {
        Self::new(start, width)
    }
}

/// An axis-aligned box in one of the trace coordinate spaces.
///
/// Only the X axis carries meaning for a timeline; `y`/`height` are kept so the
/// physical container can be described with the same type and so that
/// [`View::between`] produces a well-formed 2D affine.
///
/// Invariant: `width >= 0` and `height >= 0`. A zero `width` is a legitimate
/// degenerate state (a trace made of a single point-in-time event).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct View {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl View {
    /// The empty space at the origin.
    pub const EMPTY: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new view.
    ///
    /// Callers are expected to pass non-negative extents; use [`View::try_new`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new view, rejecting non-finite components and negative extents.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, SpaceError> {
        for (component, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(SpaceError::NonFinite { component, value });
            }
        }
        if width < 0.0 {
            return Err(SpaceError::Negative {
                component: "width",
                value: width,
            });
        }
        if height < 0.0 {
            return Err(SpaceError::Negative {
                component: "height",
                value: height,
            });
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Left edge, same as `x`.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge, `x + width`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge, same as `y`.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Bottom edge, `y + height`.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal extent as an [`Extent`].
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(self.x, self.width)
    }

    /// Returns `true` if the view has no horizontal extent.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0
    }

    /// Affine mapping coordinates expressed in `self` into coordinates of `to`.
    ///
    /// `self.x` maps onto `to.x` and `self.right()` maps onto `to.right()`
    /// (likewise for Y). A zero-sized source axis maps with unit scale so the
    /// result stays finite.
    #[must_use]
    pub fn between(&self, to: &Self) -> Affine {
        let sx = ratio(to.width, self.width);
        let sy = ratio(to.height, self.height);
        Affine::new([sx, 0.0, 0.0, sy, to.x - self.x * sx, to.y - self.y * sy])
    }

    /// Applies an affine to this box, returning the transformed box.
    ///
    /// The origin is mapped as a point and the extents as a vector, so a pure
    /// translation leaves `width`/`height` untouched.
    #[must_use]
    pub fn transform(&self, matrix: Affine) -> Self {
        let [a, b, c, d, _, _] = matrix.as_coeffs();
        let origin = matrix * Point::new(self.x, self.y);
        Self {
            x: origin.x,
            y: origin.y,
            width: a * self.width + c * self.height,
            height: b * self.width + d * self.height,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Vec2};

    use super::{Extent, View};
    use crate::SpaceError;

    #[test]
    fn between_maps_edges_onto_edges() {
        let from = View::new(10.0, 0.0, 100.0, 1.0);
        let to = View::new(500.0, 0.0, 50.0, 1.0);
        let m = from.between(&to);

        let left = m * Point::new(from.left(), 0.0);
        let right = m * Point::new(from.right(), 0.0);
        assert!((left.x - to.left()).abs() < 1e-9);
        assert!((right.x - to.right()).abs() < 1e-9);
    }

    #[test]
    fn composed_matrix_maps_pixels_into_view() {
        let space = View::new(0.0, 0.0, 1000.0, 1.0);
        let view = View::new(200.0, 0.0, 50.0, 1.0);
        let physical = View::new(0.0, 0.0, 500.0, 1.0);

        let m = space.between(&view) * physical.between(&space);
        let [scale, _, _, _, tx, _] = m.as_coeffs();
        assert!((scale - 0.1).abs() < 1e-12, "time per pixel");
        assert!((tx - 200.0).abs() < 1e-12, "pixel 0 maps to view start");

        let end = m * Point::new(500.0, 0.0);
        assert!((end.x - 250.0).abs() < 1e-9);
    }

    #[test]
    fn zero_width_source_stays_finite() {
        let degenerate = View::new(0.0, 0.0, 0.0, 0.0);
        let m = degenerate.between(&View::new(0.0, 0.0, 100.0, 10.0));
        assert!(m.as_coeffs().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn scale_about_point_keeps_anchor() {
        let view = View::new(100.0, 0.0, 200.0, 1.0);
        let anchor = 150.0;
        let m = Affine::translate(Vec2::new(anchor, 0.0))
            * Affine::scale_non_uniform(0.5, 1.0)
            * Affine::translate(Vec2::new(-anchor, 0.0));

        let zoomed = view.transform(m);
        assert!((zoomed.width - 100.0).abs() < 1e-9);
        // The anchor sat a quarter of the way into the view and still does.
        let before = (anchor - view.x) / view.width;
        let after = (anchor - zoomed.x) / zoomed.width;
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn translation_does_not_change_extent() {
        let view = View::new(5.0, 0.0, 40.0, 2.0);
        let moved = view.transform(Affine::translate(Vec2::new(10.0, 0.0)));
        assert_eq!(moved, View::new(15.0, 0.0, 40.0, 2.0));
    }

    #[test]
    fn try_new_rejects_bad_components() {
        assert_eq!(
            View::try_new(0.0, 0.0, -1.0, 0.0),
            Err(SpaceError::Negative {
                component: "width",
                value: -1.0
            })
        );
        assert!(matches!(
            View::try_new(f64::NAN, 0.0, 1.0, 0.0),
            Err(SpaceError::NonFinite { component: "x", .. })
        ));
        assert!(View::try_new(0.0, 0.0, 0.0, 0.0).unwrap().is_degenerate());
    }

    #[test]
    fn extent_helpers() {
        let e = Extent::from([100.0, 20.0]);
        assert_eq!(e.end(), 120.0);
        assert_eq!(e.center(), 110.0);
        assert_eq!(e.relative_to(100.0), Extent::new(0.0, 20.0));
    }
}

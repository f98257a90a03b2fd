// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;

use crate::View;

/// Cached mapping between physical pixels and trace time.
///
/// Built from the three live spaces and rebuilt wholesale whenever any of
/// them changes; it is never patched incrementally. The composed matrix maps
/// a physical pixel into origin-relative trace time:
///
/// ```text
/// px_to_time = trace_space.between(trace_view) * physical.between(trace_space)
/// ```
///
/// Its X scale is "trace units per pixel" and its X translation is the view's
/// left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    origin: f64,
    space: View,
    view: View,
    physical: View,
    px_to_time: Affine,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(0.0, View::EMPTY, View::EMPTY, View::EMPTY)
    }
}

impl Projection {
    /// Composes the pixel-to-time matrix for the given spaces.
    ///
    /// `origin` is the absolute timestamp of trace-space `0`.
    #[must_use]
    pub fn new(origin: f64, space: View, view: View, physical: View) -> Self {
        let px_to_time = space.between(&view) * physical.between(&space);
        Self {
            origin,
            space,
            view,
            physical,
            px_to_time,
        }
    }

    /// Absolute timestamp of trace-space `0`.
    #[must_use]
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Full trace extent.
    #[must_use]
    pub fn space(&self) -> &View {
        &self.space
    }

    /// Visible window.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Pixel extent of the timeline column.
    #[must_use]
    pub fn physical(&self) -> &View {
        &self.physical
    }

    /// The composed pixel-to-time matrix.
    #[must_use]
    pub fn matrix(&self) -> Affine {
        self.px_to_time
    }

    /// Trace units covered by one physical pixel.
    #[must_use]
    pub fn time_per_px(&self) -> f64 {
        self.px_to_time.as_coeffs()[0]
    }

    /// Pixel offset of absolute timestamp `ts` from the left edge of the timeline.
    ///
    /// Returns `0` when the view has no extent.
    #[must_use]
    pub fn transform_x(&self, ts: f64) -> f64 {
        let scale = self.time_per_px();
        if scale == 0.0 {
            return 0.0;
        }
        (ts - self.origin - self.view.x) / scale
    }

    /// Origin-relative trace time under physical pixel `px`.
    #[must_use]
    pub fn cursor_to_time(&self, px: f64) -> f64 {
        if self.physical.width == 0.0 {
            return self.view.x;
        }
        self.view.x + px / self.physical.width * self.view.width
    }
}

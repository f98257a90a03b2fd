// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A dense strip of rows `0..len` laid out top to bottom.
pub trait ExtentModel {
    /// Number of rows.
    fn len(&self) -> usize;

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all row extents.
    fn total_extent(&self) -> f64;

    /// Extent of row `index`. Out-of-range rows have zero extent.
    fn extent_of(&self, index: usize) -> f64;

    /// Offset of the top edge of row `index`.
    ///
    /// `index == len` yields [`ExtentModel::total_extent`].
    fn offset_of(&self, index: usize) -> f64;

    /// Row containing `offset`, clamped to `0..len`.
    ///
    /// Returns `0` for an empty model.
    fn index_at_offset(&self, offset: f64) -> usize;
}

/// Rows to realize for a scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibleStrip {
    /// First realized row.
    pub start: usize,
    /// One past the last realized row.
    pub end: usize,
    /// Spacer above `start`.
    pub before_extent: f64,
    /// Spacer below `end`.
    pub after_extent: f64,
    /// Total content extent.
    pub content_extent: f64,
}

impl VisibleStrip {
    /// Returns `true` if no row is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `index` is realized.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Computes which rows intersect `[scroll_offset - overscan, scroll_offset + viewport + overscan)`.
pub fn compute_visible_strip<M: ExtentModel + ?Sized>(
    model: &M,
    scroll_offset: f64,
    viewport_extent: f64,
    overscan: f64,
) -> VisibleStrip {
    let content_extent = model.total_extent();
    let len = model.len();
    if len == 0 || viewport_extent <= 0.0 {
        return VisibleStrip {
            content_extent,
            after_extent: content_extent,
            ..VisibleStrip::default()
        };
    }

    let top = (scroll_offset - overscan.max(0.0)).max(0.0);
    let bottom = (scroll_offset + viewport_extent + overscan.max(0.0)).min(content_extent);

    let start = model.index_at_offset(top);
    let mut end = model.index_at_offset(bottom);
    // Include the row whose top edge sits before `bottom`.
    if end < len && model.offset_of(end) < bottom {
        end += 1;
    }
    let end = end.max(start + 1).min(len);

    let before_extent = model.offset_of(start);
    let after_extent = (content_extent - model.offset_of(end)).max(0.0);

    VisibleStrip {
        start,
        end,
        before_extent,
        after_extent,
        content_extent,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_visible_strip;
    use crate::FixedExtentModel;

    #[test]
    fn strip_covers_viewport_and_overscan() {
        let model = FixedExtentModel::new(100, 24.0);
        let strip = compute_visible_strip(&model, 240.0, 240.0, 48.0);

        assert_eq!(strip.start, 8);
        assert_eq!(strip.end, 22);
        assert!((strip.before_extent - 8.0 * 24.0).abs() < 1e-9);
        assert!((strip.after_extent - 78.0 * 24.0).abs() < 1e-9);
        assert!((strip.content_extent - 2400.0).abs() < 1e-9);
    }

    #[test]
    fn strip_at_end_is_clamped() {
        let model = FixedExtentModel::new(10, 24.0);
        let strip = compute_visible_strip(&model, 10_000.0, 100.0, 0.0);
        assert_eq!(strip.end, 10);
        assert!(strip.start < strip.end);
        assert_eq!(strip.after_extent, 0.0);
    }

    #[test]
    fn empty_model_yields_empty_strip() {
        let model = FixedExtentModel::new(0, 24.0);
        let strip = compute_visible_strip(&model, 0.0, 100.0, 10.0);
        assert!(strip.is_empty());
        assert_eq!(strip.content_extent, 0.0);
    }
}

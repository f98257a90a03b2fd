// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{ExtentModel, FixedExtentModel, VisibleStrip, compute_visible_strip};

/// Where a row should land when scrolled to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAnchor {
    /// Scroll the minimum distance: align the row's top edge when it is
    /// above the viewport, its bottom edge when below, and do nothing if visible.
    #[default]
    Auto,
    /// Align the row's top edge with the viewport top.
    Top,
    /// Put the row's top edge at the viewport centre.
    Center,
    /// Like [`ScrollAnchor::Center`], but only when the row is outside the viewport.
    CenterIfOutside,
}

/// Scroll state for a vertically virtualized list.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualizedList<M = FixedExtentModel> {
    model: M,
    scroll_top: f64,
    viewport_height: f64,
    overscan: f64,
}

impl<M: ExtentModel> VirtualizedList<M> {
    /// Creates a list scrolled to the top with no overscan.
    pub fn new(model: M, viewport_height: f64) -> Self {
        Self {
            model,
            scroll_top: 0.0,
            viewport_height: viewport_height.max(0.0),
            overscan: 0.0,
        }
    }

    /// Returns the list with `overscan` pixels realized above and below the viewport.
    #[must_use]
    pub fn with_overscan(mut self, overscan: f64) -> Self {
        self.overscan = overscan.max(0.0);
        self
    }

    /// The row model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the row model; the scroll offset is re-clamped on
    /// the next scroll update.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Current scroll offset.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Viewport height.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Largest valid scroll offset.
    pub fn max_scroll_top(&self) -> f64 {
        (self.model.total_extent() - self.viewport_height).max(0.0)
    }

    /// Sets the scroll offset, clamped to `[0, max_scroll_top]`.
    ///
    /// Returns the applied offset.
    pub fn set_scroll_top(&mut self, scroll_top: f64) -> f64 {
        let scroll_top = if scroll_top.is_nan() { 0.0 } else { scroll_top };
        self.scroll_top = scroll_top.clamp(0.0, self.max_scroll_top());
        self.scroll_top
    }

    /// Sets the viewport height (e.g. after a container resize).
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
        self.scroll_top = self.scroll_top.min(self.max_scroll_top());
    }

    /// Rows to realize for the current scroll offset.
    pub fn visible_strip(&self) -> VisibleStrip {
        compute_visible_strip(
            &self.model,
            self.scroll_top,
            self.viewport_height,
            self.overscan,
        )
    }

    /// Returns `true` if row `index`'s top edge lies within the viewport.
    pub fn is_row_visible(&self, index: usize) -> bool {
        let position = self.model.offset_of(index);
        position >= self.scroll_top && position <= self.scroll_top + self.viewport_height
    }

    /// Scrolls so row `index` lands according to `anchor`.
    ///
    /// Returns the new scroll offset, or `None` when the anchor decided the
    /// row is already in view. Rows past the end are ignored.
    pub fn scroll_to_row(&mut self, index: usize, anchor: ScrollAnchor) -> Option<f64> {
        if index >= self.model.len() {
            return None;
        }

        let position = self.model.offset_of(index);
        let top = self.scroll_top;
        let height = self.viewport_height;
        let above = position < top;
        let below = position > top + height;

        let target = match anchor {
            ScrollAnchor::Top => position,
            ScrollAnchor::Center => position - height / 2.0,
            ScrollAnchor::CenterIfOutside if above || below => position - height / 2.0,
            ScrollAnchor::Auto if above => position,
            ScrollAnchor::Auto if below => position - height + self.model.extent_of(index),
            ScrollAnchor::CenterIfOutside | ScrollAnchor::Auto => return None,
        };
        Some(self.set_scroll_top(target))
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollAnchor, VirtualizedList};
    use crate::FixedExtentModel;

    fn list() -> VirtualizedList {
        VirtualizedList::new(FixedExtentModel::new(1_000, 24.0), 240.0)
    }

    #[test]
    fn top_anchor_aligns_row() {
        let mut list = list();
        assert_eq!(list.scroll_to_row(50, ScrollAnchor::Top), Some(1200.0));
        assert_eq!(list.scroll_top(), 1200.0);
    }

    #[test]
    fn center_anchor_always_scrolls() {
        let mut list = list();
        list.set_scroll_top(1200.0);
        assert_eq!(list.scroll_to_row(50, ScrollAnchor::Center), Some(1080.0));
    }

    #[test]
    fn center_if_outside_skips_visible_rows() {
        let mut list = list();
        list.set_scroll_top(1200.0);
        assert_eq!(list.scroll_to_row(55, ScrollAnchor::CenterIfOutside), None);
        assert_eq!(list.scroll_to_row(10, ScrollAnchor::CenterIfOutside), Some(120.0));
        assert_eq!(list.scroll_to_row(200, ScrollAnchor::CenterIfOutside), Some(4680.0));
    }

    #[test]
    fn auto_scrolls_minimum_distance() {
        let mut list = list();
        list.set_scroll_top(1200.0);
        // Above: align top.
        assert_eq!(list.scroll_to_row(20, ScrollAnchor::Auto), Some(480.0));
        // Below: align bottom edge of the row with the viewport bottom.
        assert_eq!(list.scroll_to_row(40, ScrollAnchor::Auto), Some(960.0 - 240.0 + 24.0));
        // Visible.
        assert_eq!(list.scroll_to_row(35, ScrollAnchor::Auto), None);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut list = list();
        assert_eq!(list.scroll_to_row(0, ScrollAnchor::Center), Some(0.0));
        assert_eq!(list.scroll_to_row(999, ScrollAnchor::Top), Some(24_000.0 - 240.0));
        assert_eq!(list.scroll_to_row(1_000, ScrollAnchor::Top), None);
    }

    #[test]
    fn shrinking_content_reclamps_on_resize() {
        let mut list = list();
        list.set_scroll_top(5_000.0);
        list.model_mut().set_len(10);
        list.set_viewport_height(200.0);
        assert_eq!(list.scroll_top(), 40.0);
    }
}

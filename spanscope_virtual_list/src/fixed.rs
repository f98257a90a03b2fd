// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ExtentModel;

/// Rows of one uniform height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedExtentModel {
    len: usize,
    extent: f64,
}

impl FixedExtentModel {
    /// Creates a model of `len` rows, each `extent` tall.
    ///
    /// Negative or non-finite extents are treated as zero.
    #[must_use]
    pub fn new(len: usize, extent: f64) -> Self {
        Self {
            len,
            extent: sanitize(extent),
        }
    }

    /// Row height.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Sets the number of rows.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Sets the row height.
    pub fn set_extent(&mut self, extent: f64) {
        self.extent = sanitize(extent);
    }
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

impl ExtentModel for FixedExtentModel {
    fn len(&self) -> usize {
        self.len
    }

    fn total_extent(&self) -> f64 {
        self.extent * self.len as f64
    }

    fn extent_of(&self, index: usize) -> f64 {
        if index < self.len { self.extent } else { 0.0 }
    }

    fn offset_of(&self, index: usize) -> f64 {
        self.extent * index.min(self.len) as f64
    }

    fn index_at_offset(&self, offset: f64) -> usize {
        if self.len == 0 || self.extent <= 0.0 || offset.is_nan() || offset <= 0.0 {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "offset is positive and the quotient is clamped to len"
        )]
        let index = (offset / self.extent) as usize;
        index.min(self.len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::FixedExtentModel;
    use crate::ExtentModel;

    #[test]
    fn offsets_and_lookup_agree() {
        let model = FixedExtentModel::new(5, 24.0);
        assert_eq!(model.total_extent(), 120.0);
        assert_eq!(model.offset_of(3), 72.0);
        assert_eq!(model.offset_of(99), 120.0);
        assert_eq!(model.index_at_offset(72.0), 3);
        assert_eq!(model.index_at_offset(71.9), 2);
        assert_eq!(model.index_at_offset(-5.0), 0);
        assert_eq!(model.index_at_offset(1e9), 4);
        assert_eq!(model.extent_of(5), 0.0);
    }

    #[test]
    fn invalid_extent_collapses_to_zero() {
        let model = FixedExtentModel::new(3, f64::NAN);
        assert_eq!(model.extent(), 0.0);
        assert_eq!(model.index_at_offset(10.0), 0);
    }
}

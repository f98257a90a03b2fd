// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ColumnError;

const SUM_EPSILON: f64 = 1e-9;

/// The two resizable columns of the waterfall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// The tree/list column on the left.
    List,
    /// The span bar/timeline column on the right.
    SpanList,
}

/// One column: its share of the container and its horizontal scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Column {
    /// Fraction of the container width, in `(0, 1)`.
    pub width: f64,
    /// Horizontal translate applied to the column's row content.
    pub translate_x: f64,
}

/// The list / span-list split. Widths always sum to `1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Columns {
    /// Left column.
    pub list: Column,
    /// Right column.
    pub span_list: Column,
}

impl Columns {
    /// Creates a split, validating that both widths are in `(0, 1)` and sum to `1`.
    pub fn new(list: f64, span_list: f64) -> Result<Self, ColumnError> {
        for width in [list, span_list] {
            if !(width.is_finite() && width > 0.0 && width < 1.0) {
                return Err(ColumnError::OutOfRange { width });
            }
        }
        if ((list + span_list) - 1.0).abs() > SUM_EPSILON {
            return Err(ColumnError::BadSum { list, span_list });
        }
        Ok(Self {
            list: Column {
                width: list,
                translate_x: 0.0,
            },
            span_list: Column {
                width: span_list,
                translate_x: 0.0,
            },
        })
    }

    /// The column of `kind`.
    #[must_use]
    pub fn get(&self, kind: ColumnKind) -> &Column {
        match kind {
            ColumnKind::List => &self.list,
            ColumnKind::SpanList => &self.span_list,
        }
    }

    /// Widths after moving the divider by `delta` of the container width,
    /// without committing them.
    ///
    /// Each column keeps at least `min_width`; the pair still sums to `1`.
    #[must_use]
    pub fn preview(&self, delta: f64, min_width: f64) -> (f64, f64) {
        let min_width = min_width.clamp(0.0, 0.5);
        let delta = if delta.is_finite() { delta } else { 0.0 };
        let list = (self.list.width + delta).clamp(min_width, 1.0 - min_width);
        (list, 1.0 - list)
    }

    /// Moves the divider by `delta` and commits the new split.
    ///
    /// Returns the list column width.
    pub fn resize_by(&mut self, delta: f64, min_width: f64) -> f64 {
        let (list, span_list) = self.preview(delta, min_width);
        self.list.width = list;
        self.span_list.width = span_list;
        list
    }
}

#[cfg(test)]
mod tests {
    use super::Columns;
    use crate::ColumnError;

    #[test]
    fn rejects_bad_splits() {
        assert!(matches!(
            Columns::new(0.5, 0.6),
            Err(ColumnError::BadSum { .. })
        ));
        assert!(matches!(
            Columns::new(0.0, 1.0),
            Err(ColumnError::OutOfRange { .. })
        ));
        assert!(matches!(
            Columns::new(f64::NAN, 0.5),
            Err(ColumnError::OutOfRange { .. })
        ));
    }

    #[test]
    fn resize_keeps_sum_and_minimum() {
        let mut columns = Columns::new(0.5, 0.5).unwrap();
        for delta in [0.1, -0.3, 0.9, -2.0, 0.37, f64::INFINITY] {
            columns.resize_by(delta, 0.05);
            let sum = columns.list.width + columns.span_list.width;
            assert!((sum - 1.0).abs() < 1e-12, "sum drifted to {sum}");
            assert!(columns.list.width >= 0.05);
            assert!(columns.span_list.width >= 0.05 - 1e-12);
        }
    }

    #[test]
    fn preview_does_not_commit() {
        let columns = Columns::new(0.5, 0.5).unwrap();
        let (list, span) = columns.preview(0.1, 0.05);
        assert!((list - 0.6).abs() < 1e-12);
        assert!((span - 0.4).abs() < 1e-12);
        assert_eq!(columns.list.width, 0.5);
    }
}

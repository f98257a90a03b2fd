// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a column split is not a valid partition of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnError {
    /// A width was NaN, infinite, or outside `(0, 1)`.
    OutOfRange {
        /// The rejected width.
        width: f64,
    },
    /// The two widths do not add up to `1`.
    BadSum {
        /// List column width.
        list: f64,
        /// Span column width.
        span_list: f64,
    },
}

impl fmt::Display for ColumnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { width } => {
                write!(f, "column width {width} is outside (0, 1)")
            }
            Self::BadSum { list, span_list } => write!(
                f,
                "column widths must sum to 1, got {list} + {span_list} = {}",
                list + span_list
            ),
        }
    }
}

impl core::error::Error for ColumnError {}

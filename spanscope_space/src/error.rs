// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a space is built from an invalid extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpaceError {
    /// One of the components was NaN or infinite.
    NonFinite {
        /// Name of the offending component (`"x"`, `"width"`, ...).
        component: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A width or height was negative.
    Negative {
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { component, value } => {
                write!(f, "space component `{component}` is not finite ({value})")
            }
            Self::Negative { component, value } => {
                write!(f, "space component `{component}` is negative ({value})")
            }
        }
    }
}

impl core::error::Error for SpaceError {}

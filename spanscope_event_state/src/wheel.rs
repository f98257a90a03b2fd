// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel input classification.
//!
//! Timeline wheel handling has two modes selected by a modifier key: with the
//! zoom modifier held, vertical wheel movement zooms about the cursor;
//! otherwise horizontal movement pans. Holding shift swaps the axes so a plain
//! mouse wheel can pan horizontally.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use spanscope_event_state::wheel::{Modifiers, WheelInput, WheelIntent};
//!
//! let pan = WheelInput::new(Vec2::new(0.0, 30.0), Point::new(10.0, 0.0))
//!     .with_modifiers(Modifiers::SHIFT);
//! assert_eq!(pan.intent(Modifiers::META, 0.01), WheelIntent::Pan { distance: 30.0 });
//!
//! let zoom = WheelInput::new(Vec2::new(0.0, -10.0), Point::new(120.0, 0.0))
//!     .with_modifiers(Modifiers::META);
//! let WheelIntent::Zoom { scale, anchor_x } = zoom.intent(Modifiers::META, 0.01) else {
//!     unreachable!();
//! };
//! assert!((scale - 0.9).abs() < 1e-12);
//! assert_eq!(anchor_x, 120.0);
//! ```

use bitflags::bitflags;
use kurbo::{Point, Vec2};

bitflags! {
    /// Keyboard modifiers held while the wheel event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL = 1 << 1;
        /// Alt / Option key.
        const ALT = 1 << 2;
        /// Meta / Command / Windows key.
        const META = 1 << 3;
    }
}

/// A raw wheel event as seen by the element it fired on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in pixels.
    pub delta: Vec2,
    /// Pointer position relative to the element's left/top edge.
    pub offset: Point,
    /// Modifiers held at the time of the event.
    pub modifiers: Modifiers,
}

/// What a wheel event asks the timeline to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelIntent {
    /// Scale the view by `scale` about the pixel column `anchor_x`.
    Zoom {
        /// Multiplicative factor applied to the view width.
        scale: f64,
        /// Pixel offset of the cursor inside the element.
        anchor_x: f64,
    },
    /// Move the view horizontally by `distance` pixels.
    Pan {
        /// Horizontal distance in pixels, sign follows the wheel delta.
        distance: f64,
    },
}

impl WheelIntent {
    /// Returns `true` when the event actually moves something.
    ///
    /// Hosts should only cancel the platform default (for example
    /// back/forward swipe navigation) for consuming events.
    #[must_use]
    pub fn consumes(&self) -> bool {
        match *self {
            Self::Zoom { scale, .. } => scale != 1.0,
            Self::Pan { distance } => distance != 0.0,
        }
    }
}

impl WheelInput {
    /// Creates an input without modifiers.
    #[must_use]
    pub fn new(delta: Vec2, offset: Point) -> Self {
        Self {
            delta,
            offset,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns the same input with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Horizontal distance, taking the vertical delta instead while shift is held.
    #[must_use]
    pub fn horizontal_distance(&self) -> f64 {
        if self.modifiers.contains(Modifiers::SHIFT) {
            self.delta.y
        } else {
            self.delta.x
        }
    }

    /// Classifies the input.
    ///
    /// `zoom_modifier` selects zoom mode when any of its bits are held.
    /// `zoom_factor` converts vertical delta into a scale: `1 + delta.y * zoom_factor`.
    #[must_use]
    pub fn intent(&self, zoom_modifier: Modifiers, zoom_factor: f64) -> WheelIntent {
        if self.modifiers.intersects(zoom_modifier) {
            WheelIntent::Zoom {
                scale: 1.0 + self.delta.y * zoom_factor,
                anchor_x: self.offset.x,
            }
        } else {
            WheelIntent::Pan {
                distance: self.horizontal_distance(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Modifiers, WheelInput, WheelIntent};

    #[test]
    fn plain_wheel_pans_on_x() {
        let input = WheelInput::new(Vec2::new(12.0, 40.0), Point::ZERO);
        assert_eq!(
            input.intent(Modifiers::META, 0.01),
            WheelIntent::Pan { distance: 12.0 }
        );
    }

    #[test]
    fn zero_delta_is_not_consumed() {
        let pan = WheelInput::new(Vec2::new(0.0, 40.0), Point::ZERO);
        assert!(!pan.intent(Modifiers::META, 0.01).consumes());

        let zoom = WheelInput::new(Vec2::new(5.0, 0.0), Point::ZERO)
            .with_modifiers(Modifiers::META);
        assert!(!zoom.intent(Modifiers::META, 0.01).consumes());
    }

    #[test]
    fn positive_delta_zooms_out() {
        let zoom = WheelInput::new(Vec2::new(0.0, 50.0), Point::new(3.0, 0.0))
            .with_modifiers(Modifiers::META | Modifiers::SHIFT);
        match zoom.intent(Modifiers::META, 0.01) {
            WheelIntent::Zoom { scale, anchor_x } => {
                assert!((scale - 1.5).abs() < 1e-12);
                assert_eq!(anchor_x, 3.0);
            }
            other => panic!("expected zoom, got {other:?}"),
        }
    }

    #[test]
    fn zoom_modifier_is_configurable() {
        let input = WheelInput::new(Vec2::new(0.0, 10.0), Point::ZERO)
            .with_modifiers(Modifiers::CTRL);
        assert!(matches!(
            input.intent(Modifiers::META, 0.01),
            WheelIntent::Pan { .. }
        ));
        assert!(matches!(
            input.intent(Modifiers::META | Modifiers::CTRL, 0.01),
            WheelIntent::Zoom { .. }
        ));
    }
}

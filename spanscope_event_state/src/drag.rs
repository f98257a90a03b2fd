// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag tracking.
//!
//! A drag session remembers where it began and where the pointer was on the
//! previous move. Each [`PointerDrag::step`] reports both the incremental delta
//! and the offset from the origin; [`PointerDrag::finish`] ends the session and
//! returns the final offset.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use spanscope_event_state::drag::PointerDrag;
//!
//! let mut drag = PointerDrag::default();
//! drag.begin(Point::new(500.0, 10.0));
//!
//! let step = drag.step(Point::new(520.0, 12.0)).unwrap();
//! assert_eq!(step.delta, Vec2::new(20.0, 2.0));
//!
//! let step = drag.step(Point::new(530.0, 12.0)).unwrap();
//! assert_eq!(step.delta, Vec2::new(10.0, 0.0));
//! assert_eq!(step.total, Vec2::new(30.0, 2.0));
//!
//! assert_eq!(drag.finish(Point::new(600.0, 0.0)), Some(Vec2::new(100.0, -10.0)));
//! assert!(!drag.is_active());
//! ```

use kurbo::{Point, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Session {
    origin: Point,
    previous: Point,
}

/// Movement reported for a single pointer move during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Movement since the previous move (or since the drag began).
    pub delta: Vec2,
    /// Movement since the drag began.
    pub total: Vec2,
}

/// Tracks at most one active drag session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerDrag {
    session: Option<Session>,
}

impl PointerDrag {
    /// Begins a drag at `at`, replacing any session in progress.
    pub fn begin(&mut self, at: Point) {
        self.session = Some(Session {
            origin: at,
            previous: at,
        });
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Where the active drag began.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.session.map(|s| s.origin)
    }

    /// Pointer position recorded by the last step.
    #[must_use]
    pub fn previous(&self) -> Option<Point> {
        self.session.map(|s| s.previous)
    }

    /// Records a pointer move. Returns `None` when no drag is active.
    pub fn step(&mut self, at: Point) -> Option<DragStep> {
        let session = self.session.as_mut()?;
        let step = DragStep {
            delta: at - session.previous,
            total: at - session.origin,
        };
        session.previous = at;
        Some(step)
    }

    /// Ends the drag at `at` and returns the offset from its origin.
    pub fn finish(&mut self, at: Point) -> Option<Vec2> {
        self.session.take().map(|s| at - s.origin)
    }

    /// Drops the active session without reporting anything.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

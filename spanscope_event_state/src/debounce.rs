// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot settle timer.
//!
//! A [`Debounce`] fires once after activity has been quiet for its window.
//! Every [`Debounce::schedule`] replaces the pending deadline; there is never
//! more than one outstanding deadline, and nothing is queued.
//!
//! [`Debounce::arm`] is for input that arrives without a timestamp: the
//! window then opens at the next [`Debounce::poll`].

/// Fires once `window` milliseconds after the last [`Debounce::schedule`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Debounce {
    window: f64,
    deadline: Option<f64>,
    armed: bool,
}

impl Debounce {
    /// Creates an idle timer with the given quiet window in milliseconds.
    #[must_use]
    pub fn new(window: f64) -> Self {
        Self {
            window,
            deadline: None,
            armed: false,
        }
    }

    /// Quiet window in milliseconds.
    #[must_use]
    pub fn window(&self) -> f64 {
        self.window
    }

    /// Pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Returns `true` while a deadline is pending or the timer is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.armed || self.deadline.is_some()
    }

    /// (Re)arms the timer relative to `now`.
    ///
    /// Returns `true` if the timer was idle, i.e. this call starts a new burst
    /// of activity.
    pub fn schedule(&mut self, now: f64) -> bool {
        let was_idle = !self.is_pending();
        self.armed = false;
        self.deadline = Some(now + self.window);
        was_idle
    }

    /// (Re)arms the timer; the window opens at the next [`poll`](Self::poll).
    ///
    /// Returns `true` if the timer was idle.
    pub fn arm(&mut self) -> bool {
        let was_idle = !self.is_pending();
        self.deadline = None;
        self.armed = true;
        was_idle
    }

    /// Disarms the timer. Returns `true` if a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        let pending = self.is_pending();
        self.armed = false;
        self.deadline = None;
        pending
    }

    /// Returns `true` exactly once when `now` reaches the pending deadline.
    ///
    /// An armed timer gets its deadline here, `window` after `now`.
    pub fn poll(&mut self, now: f64) -> bool {
        if core::mem::take(&mut self.armed) {
            self.deadline = Some(now + self.window);
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;

    #[test]
    fn fires_once_after_quiet_window() {
        let mut d = Debounce::new(300.0);
        d.schedule(1000.0);
        assert!(!d.poll(1299.0));
        assert!(d.poll(1300.0));
        assert!(!d.poll(1400.0));
        assert!(!d.is_pending());
    }

    #[test]
    fn reschedule_pushes_deadline() {
        let mut d = Debounce::new(200.0);
        assert!(d.schedule(0.0));
        assert!(!d.schedule(150.0));
        assert_eq!(d.deadline(), Some(350.0));
        assert!(!d.poll(200.0));
        assert!(d.poll(350.0));
    }

    #[test]
    fn armed_window_opens_at_next_poll() {
        let mut d = Debounce::new(200.0);
        assert!(d.arm());
        assert!(d.is_pending());
        assert_eq!(d.deadline(), None);

        assert!(!d.poll(5_000.0));
        assert_eq!(d.deadline(), Some(5_200.0));
        assert!(!d.arm(), "re-arming during a burst is not a new burst");
        assert!(!d.poll(5_300.0));
        assert!(!d.poll(5_499.0));
        assert!(d.poll(5_500.0));
        assert!(!d.is_pending());
    }

    #[test]
    fn cancel_reports_pending_state() {
        let mut d = Debounce::new(10.0);
        assert!(!d.cancel());
        d.schedule(0.0);
        assert!(d.cancel());
        assert!(!d.poll(100.0));
        d.arm();
        assert!(d.cancel());
        assert!(!d.poll(1_000.0));
        assert!(!d.is_pending());
    }
}

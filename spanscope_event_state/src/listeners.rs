// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Set-based listener bags.
//!
//! Listeners are reference-counted callbacks identified by allocation: adding
//! the same `Rc` twice is a no-op, and removal takes the same `Rc` that was
//! added. One-shot listeners are dropped after their first dispatch.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use spanscope_event_state::listeners::{Listener, ListenerBag};
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&seen);
//! let listener: Listener<f64> = Rc::new(move |w: &f64| sink.set(*w));
//!
//! let mut bag = ListenerBag::new();
//! assert!(bag.on(&listener));
//! assert!(!bag.on(&listener), "registered at most once");
//!
//! bag.dispatch(&0.6);
//! assert_eq!(seen.get(), 0.6);
//!
//! assert!(bag.off(&listener));
//! assert!(bag.is_empty());
//! ```

use alloc::rc::Rc;

use smallvec::SmallVec;

/// A shared callback receiving a borrowed payload.
pub type Listener<A> = Rc<dyn Fn(&A)>;

struct Entry<A> {
    listener: Listener<A>,
    once: bool,
}

/// A set of listeners for one event kind.
pub struct ListenerBag<A> {
    entries: SmallVec<[Entry<A>; 2]>,
}

impl<A> core::fmt::Debug for ListenerBag<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerBag")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<A> Default for ListenerBag<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn same<A>(a: &Listener<A>, b: &Listener<A>) -> bool {
    core::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl<A> ListenerBag<A> {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Adds a persistent listener. Returns `false` if it was already present.
    pub fn on(&mut self, listener: &Listener<A>) -> bool {
        self.insert(listener, false)
    }

    /// Adds a listener that is removed after it fires once.
    ///
    /// Returns `false` if it was already present.
    pub fn once(&mut self, listener: &Listener<A>) -> bool {
        self.insert(listener, true)
    }

    /// Removes a listener. Returns `false` if it was not present.
    pub fn off(&mut self, listener: &Listener<A>) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !same(&e.listener, listener));
        self.entries.len() != before
    }

    /// Returns `true` if `listener` is registered.
    #[must_use]
    pub fn contains(&self, listener: &Listener<A>) -> bool {
        self.entries.iter().any(|e| same(&e.listener, listener))
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every listener.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Calls every listener with `payload`, in registration order.
    pub fn dispatch(&mut self, payload: &A) {
        for entry in &self.entries {
            (entry.listener)(payload);
        }
        self.entries.retain(|e| !e.once);
    }

    fn insert(&mut self, listener: &Listener<A>, once: bool) -> bool {
        if self.contains(listener) {
            return false;
        }
        self.entries.push(Entry {
            listener: Rc::clone(listener),
            once,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::{Listener, ListenerBag};

    fn counter() -> (Rc<Cell<u32>>, Listener<()>) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, Rc::new(move |_: &()| sink.set(sink.get() + 1)))
    }

    #[test]
    fn once_listener_fires_a_single_time() {
        let (count, listener) = counter();
        let mut bag = ListenerBag::new();
        bag.once(&listener);

        bag.dispatch(&());
        bag.dispatch(&());
        assert_eq!(count.get(), 1);
        assert!(bag.is_empty());
    }

    #[test]
    fn distinct_closures_are_distinct_listeners() {
        let (a_count, a) = counter();
        let (b_count, b) = counter();
        let mut bag = ListenerBag::new();
        bag.on(&a);
        bag.on(&b);
        assert_eq!(bag.len(), 2);

        assert!(bag.off(&a));
        assert!(!bag.off(&a));
        bag.dispatch(&());
        assert_eq!(a_count.get(), 0);
        assert_eq!(b_count.get(), 1);
    }

    #[test]
    fn once_after_on_is_ignored() {
        let (count, listener) = counter();
        let mut bag = ListenerBag::new();
        bag.on(&listener);
        assert!(!bag.once(&listener));
        bag.dispatch(&());
        bag.dispatch(&());
        assert_eq!(count.get(), 2);
    }
}

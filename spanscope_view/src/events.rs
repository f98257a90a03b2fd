// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed notifications emitted by the view manager.
//!
//! Each event kind is a marker type naming its payload. Listeners are
//! registered at most once per kind.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use spanscope_event_state::listeners::Listener;
//! use spanscope_view::events::{DividerResizeEnd, ViewEvents};
//!
//! let stored = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&stored);
//! let persist: Listener<f64> = Rc::new(move |width: &f64| sink.set(*width));
//!
//! let mut events = ViewEvents::default();
//! events.on::<DividerResizeEnd>(&persist);
//! assert_eq!(events.listener_count::<DividerResizeEnd>(), 1);
//! ```

use spanscope_event_state::listeners::{Listener, ListenerBag};

/// An event kind and where its listeners live.
pub trait ViewEventKind {
    /// Payload delivered to listeners.
    type Payload;

    /// The listener bag for this kind.
    fn bag(events: &mut ViewEvents) -> &mut ListenerBag<Self::Payload>;

    /// The listener bag for this kind, shared.
    fn bag_ref(events: &ViewEvents) -> &ListenerBag<Self::Payload>;
}

/// A divider drag finished; the payload is the committed list column width.
#[derive(Clone, Copy, Debug)]
pub enum DividerResizeEnd {}

/// A virtualized list was attached to the manager.
#[derive(Clone, Copy, Debug)]
pub enum VirtualizedListInit {}

impl ViewEventKind for DividerResizeEnd {
    type Payload = f64;

    fn bag(events: &mut ViewEvents) -> &mut ListenerBag<f64> {
        &mut events.divider_resize_end
    }

    fn bag_ref(events: &ViewEvents) -> &ListenerBag<f64> {
        &events.divider_resize_end
    }
}

impl ViewEventKind for VirtualizedListInit {
    type Payload = ();

    fn bag(events: &mut ViewEvents) -> &mut ListenerBag<()> {
        &mut events.virtualized_list_init
    }

    fn bag_ref(events: &ViewEvents) -> &ListenerBag<()> {
        &events.virtualized_list_init
    }
}

/// Listener registry for all view events.
#[derive(Debug, Default)]
pub struct ViewEvents {
    divider_resize_end: ListenerBag<f64>,
    virtualized_list_init: ListenerBag<()>,
}

impl ViewEvents {
    /// Subscribes `listener` to `K`. Returns `false` if it was already subscribed.
    pub fn on<K: ViewEventKind>(&mut self, listener: &Listener<K::Payload>) -> bool {
        K::bag(self).on(listener)
    }

    /// Subscribes `listener` to the next `K` only.
    pub fn once<K: ViewEventKind>(&mut self, listener: &Listener<K::Payload>) -> bool {
        K::bag(self).once(listener)
    }

    /// Unsubscribes `listener` from `K`. Returns `false` if it was not subscribed.
    pub fn off<K: ViewEventKind>(&mut self, listener: &Listener<K::Payload>) -> bool {
        K::bag(self).off(listener)
    }

    /// Number of listeners subscribed to `K`.
    #[must_use]
    pub fn listener_count<K: ViewEventKind>(&self) -> usize {
        K::bag_ref(self).len()
    }

    pub(crate) fn dispatch<K: ViewEventKind>(&mut self, payload: &K::Payload) {
        K::bag(self).dispatch(payload);
    }
}

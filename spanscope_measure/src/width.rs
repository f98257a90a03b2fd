// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use spanscope_event_state::listeners::{Listener, ListenerBag};

/// Reads the rendered width of a host element.
pub trait ElementMetrics<E> {
    /// Width of `element` in pixels, or `None` if it is not laid out yet.
    fn element_width(&self, element: &E) -> Option<f64>;
}

impl<E, M: ElementMetrics<E> + ?Sized> ElementMetrics<E> for &M {
    fn element_width(&self, element: &E) -> Option<f64> {
        (**self).element_width(element)
    }
}

/// Outcome of a [`WidthMeasurer::drain`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrainReport {
    /// Number of queued elements that produced a width.
    pub measured: usize,
    /// Number of queued elements skipped because they had no layout.
    pub skipped: usize,
    /// New maximum width, if the drain raised it.
    pub max_changed: Option<f64>,
}

/// Queue + cache of element widths keyed by `K`.
///
/// `K` is the identity of whatever the element renders (a tree node, an
/// indicator), `E` is the host's element handle.
///
/// Invariants:
/// - At most one queued element per key; re-enqueueing replaces the element.
/// - [`WidthMeasurer::max`] only grows. Removing an entry leaves it untouched,
///   which keeps scroll extents stable while rows are recycled.
pub struct WidthMeasurer<K, E> {
    queue: Vec<(K, E)>,
    cache: HashMap<K, f64>,
    max: f64,
    max_listeners: ListenerBag<f64>,
    drain_listeners: ListenerBag<DrainReport>,
}

impl<K: fmt::Debug, E: fmt::Debug> fmt::Debug for WidthMeasurer<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidthMeasurer")
            .field("queue", &self.queue)
            .field("cached", &self.cache.len())
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

impl<K: Eq + Hash + Clone, E> Default for WidthMeasurer<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, E> WidthMeasurer<K, E> {
    /// Creates an empty measurer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            cache: HashMap::new(),
            max: 0.0,
            max_listeners: ListenerBag::new(),
            drain_listeners: ListenerBag::new(),
        }
    }

    /// Queues `element` to be measured for `key` on the next drain.
    pub fn enqueue_measure(&mut self, key: K, element: E) {
        if let Some(slot) = self.queue.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = element;
        } else {
            self.queue.push((key, element));
        }
    }

    /// Number of elements waiting to be measured.
    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if `key` is queued for measurement.
    #[must_use]
    pub fn is_queued(&self, key: &K) -> bool {
        self.queue.iter().any(|(k, _)| k == key)
    }

    /// Measures every queued element and updates the cache.
    ///
    /// Elements without layout are dropped from the queue and leave the cache
    /// untouched; the host re-enqueues them when they are realized again.
    /// Max listeners fire when the maximum grew; drain listeners fire when at
    /// least one element was measured.
    pub fn drain<M: ElementMetrics<E>>(&mut self, metrics: &M) -> DrainReport {
        let mut report = DrainReport::default();
        if self.queue.is_empty() {
            return report;
        }

        let previous_max = self.max;
        for (key, element) in self.queue.drain(..) {
            let Some(width) = metrics.element_width(&element) else {
                report.skipped += 1;
                continue;
            };
            report.measured += 1;
            if width > self.max {
                self.max = width;
            }
            self.cache.insert(key, width);
        }

        if self.max > previous_max {
            report.max_changed = Some(self.max);
            self.max_listeners.dispatch(&self.max);
        }
        if report.measured > 0 {
            self.drain_listeners.dispatch(&report);
        }
        report
    }

    /// Cached width for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<f64> {
        self.cache.get(key).copied()
    }

    /// Returns `true` if `key` has a cached width.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    /// Forgets `key`, both cached and queued.
    pub fn remove(&mut self, key: &K) -> Option<f64> {
        self.queue.retain(|(k, _)| k != key);
        self.cache.remove(key)
    }

    /// Largest width measured so far.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of cached widths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops all cached and queued entries and resets the maximum.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.cache.clear();
        self.max = 0.0;
    }

    /// Subscribes to maximum-width growth.
    pub fn on_max(&mut self, listener: &Listener<f64>) -> bool {
        self.max_listeners.on(listener)
    }

    /// Unsubscribes from maximum-width growth.
    pub fn off_max(&mut self, listener: &Listener<f64>) -> bool {
        self.max_listeners.off(listener)
    }

    /// Subscribes to the next drain that measures something, then unsubscribes.
    pub fn once_measured(&mut self, listener: &Listener<DrainReport>) -> bool {
        self.drain_listeners.once(listener)
    }

    /// Removes a drain listener.
    pub fn off_measured(&mut self, listener: &Listener<DrainReport>) -> bool {
        self.drain_listeners.off(listener)
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use hashbrown::HashMap;

    use super::{ElementMetrics, WidthMeasurer};
    use spanscope_event_state::listeners::Listener;

    #[derive(Default)]
    struct Layout(HashMap<u32, f64>);

    impl ElementMetrics<u32> for Layout {
        fn element_width(&self, element: &u32) -> Option<f64> {
            self.0.get(element).copied()
        }
    }

    fn layout(entries: &[(u32, f64)]) -> Layout {
        Layout(entries.iter().copied().collect())
    }

    #[test]
    fn max_event_fires_only_on_growth() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let listener: Listener<f64> = Rc::new(move |m: &f64| sink.borrow_mut().push(*m));

        let metrics = layout(&[(1, 100.0), (2, 80.0), (3, 250.0)]);
        let mut m = WidthMeasurer::<u8, u32>::new();
        m.on_max(&listener);

        m.enqueue_measure(1, 1);
        m.drain(&metrics);
        m.enqueue_measure(2, 2);
        assert_eq!(m.drain(&metrics).max_changed, None);
        m.enqueue_measure(3, 3);
        m.drain(&metrics);

        assert_eq!(*seen.borrow(), [100.0, 250.0]);
    }

    #[test]
    fn unrendered_elements_are_skipped() {
        let metrics = layout(&[(1, 10.0)]);
        let mut m = WidthMeasurer::<u8, u32>::new();
        m.enqueue_measure(1, 1);
        m.enqueue_measure(2, 99);

        let report = m.drain(&metrics);
        assert_eq!(report.measured, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(m.get(&2), None);
        assert_eq!(m.queue_len(), 0);
    }

    #[test]
    fn reenqueue_replaces_element() {
        let metrics = layout(&[(1, 10.0), (2, 20.0)]);
        let mut m = WidthMeasurer::<u8, u32>::new();
        m.enqueue_measure(7, 1);
        m.enqueue_measure(7, 2);
        assert_eq!(m.queue_len(), 1);
        m.drain(&metrics);
        assert_eq!(m.get(&7), Some(20.0));
    }

    #[test]
    fn remove_frees_entry_but_keeps_max() {
        let metrics = layout(&[(1, 300.0)]);
        let mut m = WidthMeasurer::<u8, u32>::new();
        m.enqueue_measure(1, 1);
        m.drain(&metrics);

        assert_eq!(m.remove(&1), Some(300.0));
        assert!(m.is_empty());
        assert_eq!(m.max(), 300.0);

        m.enqueue_measure(2, 1);
        m.remove(&2);
        assert!(!m.is_queued(&2));
    }

    #[test]
    fn once_measured_fires_on_next_productive_drain() {
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);
        let listener: Listener<super::DrainReport> =
            Rc::new(move |_: &super::DrainReport| *sink.borrow_mut() += 1);

        let metrics = layout(&[(1, 5.0)]);
        let mut m = WidthMeasurer::<u8, u32>::new();
        m.once_measured(&listener);

        m.enqueue_measure(9, 42);
        m.drain(&metrics);
        assert_eq!(*hits.borrow(), 0, "nothing measured yet");

        m.enqueue_measure(1, 1);
        m.drain(&metrics);
        m.enqueue_measure(1, 1);
        m.drain(&metrics);
        assert_eq!(*hits.borrow(), 1);
    }
}

// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary to the trace tree and search.
//!
//! The tree itself lives outside this crate. The view manager only needs a
//! stable identity, the depth and the time extent of each visible node, plus
//! the indicator markers drawn on the timeline.

use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use spanscope_space::Extent;

/// Stable identity of a tree node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

/// What the view needs to know about a rendered node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRef {
    /// Identity.
    pub key: NodeKey,
    /// Depth in the tree; the root is `0`.
    pub depth: usize,
    /// Absolute time extent.
    pub space: Extent,
    /// Ancestor chain identifier, used by hosts for URL sync.
    pub path: Option<Rc<str>>,
}

impl NodeRef {
    /// Creates a node reference without a path.
    #[must_use]
    pub fn new(key: NodeKey, depth: usize, space: Extent) -> Self {
        Self {
            key,
            depth,
            space,
            path: None,
        }
    }

    /// Returns the same node with `path` attached.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<Rc<str>>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Stable identity of an indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorKey(pub u64);

/// A labelled marker on the timeline, e.g. a web vital.
#[derive(Clone, Debug, PartialEq)]
pub struct Indicator {
    /// Identity.
    pub key: IndicatorKey,
    /// Absolute timestamp of the marker.
    pub start: f64,
    /// Label text.
    pub label: Rc<str>,
}

/// The flattened, expand/collapse-aware node list of a trace.
pub trait TraceTreeSource {
    /// Number of visible rows.
    fn len(&self) -> usize;

    /// Returns `true` if there are no visible rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node rendered at row `index`.
    fn node(&self, index: usize) -> Option<NodeRef>;
}

/// One search hit.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchMatch {
    /// Row index of the hit in the flattened list.
    pub index: usize,
    /// The matched node.
    pub node: NodeRef,
}

/// Result of a search over the tree: ordered hits and a node to hit lookup.
#[derive(Clone, Debug, Default)]
pub struct SearchResults {
    /// Hits in list order.
    pub matches: Vec<SearchMatch>,
    /// Position of each matched node in `matches`.
    pub lookup: HashMap<NodeKey, usize>,
}

impl SearchResults {
    /// Builds results from ordered hits, deriving the lookup.
    #[must_use]
    pub fn from_matches(matches: Vec<SearchMatch>) -> Self {
        let lookup = matches
            .iter()
            .enumerate()
            .map(|(i, m)| (m.node.key, i))
            .collect();
        Self { matches, lookup }
    }

    /// Number of hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Position of `key` among the hits.
    #[must_use]
    pub fn iterator_index_of(&self, key: NodeKey) -> Option<usize> {
        self.lookup.get(&key).copied()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{NodeKey, NodeRef, SearchMatch, SearchResults};
    use spanscope_space::Extent;

    #[test]
    fn lookup_follows_match_order() {
        let hit = |key, index| SearchMatch {
            index,
            node: NodeRef::new(NodeKey(key), 1, Extent::new(0.0, 1.0)),
        };
        let results = SearchResults::from_matches(vec![hit(7, 3), hit(2, 10), hit(9, 11)]);

        assert_eq!(results.len(), 3);
        assert_eq!(results.iterator_index_of(NodeKey(2)), Some(1));
        assert_eq!(results.iterator_index_of(NodeKey(4)), None);
    }
}

//! Sentinel-bounded doubly linked chain backed by `NodeArena`.
//!
//! Stores chain nodes in a `NodeArena` and links them by `NodeId`. Two
//! permanent sentinel nodes (header, trailer) are created at construction and
//! never removed; every splice therefore happens between two live nodes and
//! needs no empty-list special cases.
//!
//! ## Architecture
//!
//! ```text
//!   arena (NodeArena<Node<T>>)
//!   ┌─────────┬──────────────────────────────────────────────────┐
//!   │ NodeId  │ Node { element, prev, next }                     │
//!   ├─────────┼──────────────────────────────────────────────────┤
//!   │ header  │ { element: None,    prev: None,    next: id_1 }  │
//!   │ id_1    │ { element: Some(A), prev: header,  next: id_2 }  │
//!   │ id_2    │ { element: Some(B), prev: id_1,    next: trailer}│
//!   │ trailer │ { element: None,    prev: id_2,    next: None }  │
//!   └─────────┴──────────────────────────────────────────────────┘
//!
//!   header ─► [id_1] ◄──► [id_2] ◄── trailer
//! ```
//!
//! ## Operations
//! - `insert_between(e, pred, succ)`: allocate + splice, O(1)
//! - `unlink(id)`: splice out + free the arena entry, O(1)
//! - `move_to_back(id)`: detach + reattach before the trailer, O(1)
//! - `next` / `prev`: raw link navigation for the positional layer
//!
//! Chain invariant: following `next` from the header reaches the trailer
//! after exactly `len` element-holding nodes, and the `prev` links mirror the
//! `next` links node for node. `debug_validate_invariants()` checks this in
//! debug/test builds.

use crate::ds::node_arena::{NodeArena, NodeId};

#[derive(Debug)]
struct Node<T> {
    /// `None` only for the two sentinels.
    element: Option<T>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly linked chain bounded by permanent header/trailer sentinels.
#[derive(Debug)]
pub struct LinkChain<T> {
    arena: NodeArena<Node<T>>,
    header: NodeId,
    trailer: NodeId,
    len: usize,
}

impl<T> LinkChain<T> {
    /// Creates an empty chain holding only the two sentinels.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let header = arena.insert(Node {
            element: None,
            prev: None,
            next: None,
        });
        let trailer = arena.insert(Node {
            element: None,
            prev: Some(header),
            next: None,
        });
        if let Some(node) = arena.get_mut(header) {
            node.next = Some(trailer);
        }
        Self {
            arena,
            header,
            trailer,
            len: 0,
        }
    }

    /// Returns the number of element-holding nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the chain holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the header sentinel id.
    pub fn header(&self) -> NodeId {
        self.header
    }

    /// Returns the trailer sentinel id.
    pub fn trailer(&self) -> NodeId {
        self.trailer
    }

    /// Returns `true` if `id` is one of the two sentinels.
    pub fn is_sentinel(&self, id: NodeId) -> bool {
        id == self.header || id == self.trailer
    }

    /// Returns `true` if `id` is a live node in this chain (sentinels
    /// included).
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the successor link of `id`, if `id` is live.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.next)
    }

    /// Returns the predecessor link of `id`, if `id` is live.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.prev)
    }

    /// Returns the element at `id`; `None` for sentinels and dead ids.
    pub fn element(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id).and_then(|node| node.element.as_ref())
    }

    /// Returns a mutable reference to the element at `id`.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id).and_then(|node| node.element.as_mut())
    }

    /// Returns the first element-holding node, if any.
    pub fn first(&self) -> Option<NodeId> {
        let id = self.next(self.header)?;
        if id == self.trailer { None } else { Some(id) }
    }

    /// Returns the last element-holding node, if any.
    pub fn last(&self) -> Option<NodeId> {
        let id = self.prev(self.trailer)?;
        if id == self.header { None } else { Some(id) }
    }

    /// Allocates a node for `element` and splices it between `pred` and
    /// `succ`.
    ///
    /// Precondition: `pred` and `succ` are live and adjacent
    /// (`pred.next == succ`). Internal callers establish this; it is
    /// debug-asserted, not checked in release builds.
    pub fn insert_between(&mut self, element: T, pred: NodeId, succ: NodeId) -> NodeId {
        debug_assert_eq!(self.next(pred), Some(succ), "pred and succ must be adjacent");
        let id = self.arena.insert(Node {
            element: Some(element),
            prev: Some(pred),
            next: Some(succ),
        });
        if let Some(node) = self.arena.get_mut(pred) {
            node.next = Some(id);
        }
        if let Some(node) = self.arena.get_mut(succ) {
            node.prev = Some(id);
        }
        self.len += 1;
        id
    }

    /// Inserts an element just after the header.
    pub fn push_front(&mut self, element: T) -> NodeId {
        let first = self.next(self.header).expect("header links forward");
        self.insert_between(element, self.header, first)
    }

    /// Inserts an element just before the trailer.
    pub fn push_back(&mut self, element: T) -> NodeId {
        let last = self.prev(self.trailer).expect("trailer links backward");
        self.insert_between(element, last, self.trailer)
    }

    /// Splices out a non-sentinel node, frees its arena entry, and returns
    /// its element. Returns `None` for sentinels and dead ids.
    pub fn unlink(&mut self, id: NodeId) -> Option<T> {
        if self.is_sentinel(id) {
            return None;
        }
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };
        if let Some(prev_id) = prev {
            if let Some(node) = self.arena.get_mut(prev_id) {
                node.next = next;
            }
        }
        if let Some(next_id) = next {
            if let Some(node) = self.arena.get_mut(next_id) {
                node.prev = prev;
            }
        }
        self.len -= 1;
        self.arena.remove(id).and_then(|node| node.element)
    }

    /// Relinks a live non-sentinel node to sit just before the trailer
    /// without freeing it; returns `false` if `id` is not relinkable.
    pub fn move_to_back(&mut self, id: NodeId) -> bool {
        if self.is_sentinel(id) || !self.arena.contains(id) {
            return false;
        }
        if self.prev(self.trailer) == Some(id) {
            return true;
        }
        let (prev, next) = {
            let node = self.arena.get(id).expect("id checked live");
            (node.prev, node.next)
        };
        if let Some(prev_id) = prev {
            if let Some(node) = self.arena.get_mut(prev_id) {
                node.next = next;
            }
        }
        if let Some(next_id) = next {
            if let Some(node) = self.arena.get_mut(next_id) {
                node.prev = prev;
            }
        }
        let last = self.prev(self.trailer).expect("trailer links backward");
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = Some(last);
            node.next = Some(self.trailer);
        }
        if let Some(node) = self.arena.get_mut(last) {
            node.next = Some(id);
        }
        if let Some(node) = self.arena.get_mut(self.trailer) {
            node.prev = Some(id);
        }
        true
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        use rustc_hash::FxHashSet;

        let mut seen = FxHashSet::default();
        let mut count = 0usize;
        let mut prev = None;
        let mut current = Some(self.header);

        while let Some(id) = current {
            assert!(seen.insert(id), "chain revisited a node");
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev, "prev link must mirror next link");
            if self.is_sentinel(id) {
                assert!(node.element.is_none(), "sentinels hold no element");
            } else {
                assert!(node.element.is_some(), "real nodes hold an element");
                count += 1;
            }
            assert!(count <= self.len, "walk exceeded recorded length");
            prev = Some(id);
            current = node.next;
        }

        assert_eq!(prev, Some(self.trailer), "walk must end at the trailer");
        assert_eq!(count, self.len, "walk count must match recorded length");
        // The arena holds exactly the linked nodes plus the two sentinels.
        assert_eq!(self.arena.len(), self.len + 2);
    }
}

impl<T> Default for LinkChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

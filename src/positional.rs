//! Positional sequence ADT with validated, copyable position handles.
//!
//! A [`Position`] names one element's location in one [`PositionalList`]. It
//! stays valid across unrelated mutations anywhere else in the list and dies
//! only when its own element is deleted. Positions are plain `Copy` values;
//! they own nothing, and using one after its node is gone is detected and
//! reported, never silently honored.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────┐
//!   │ PositionalList<T>                                         │
//!   │                                                           │
//!   │   id: u64  (minted per list from a global counter)        │
//!   │   chain: LinkChain<T>  (sentinel-bounded, arena-backed)   │
//!   └───────────────────────────────────────────────────────────┘
//!
//!   Position = (list id, NodeId)      Copy + Eq + Hash
//!
//!   validate(p):
//!     p.list != self.id          → PositionError::WrongList
//!     !chain.contains(p.node)    → PositionError::Stale
//!     otherwise                  → the node, safe to touch
//! ```
//!
//! Every position-taking operation runs `validate` before any navigation or
//! mutation. Because the arena never recycles ids, a stale position can never
//! accidentally name a node created later.
//!
//! ## Operations
//!
//! | Method                  | Complexity | Fails with          |
//! |-------------------------|------------|---------------------|
//! | `first` / `last`        | O(1)       | — (`None` if empty) |
//! | `before` / `after`      | O(1)       | `PositionError`     |
//! | `add_first` / `add_last`| O(1)       | —                   |
//! | `add_before`/`add_after`| O(1)       | `PositionError`     |
//! | `delete`                | O(1)       | `PositionError`     |
//! | `replace`               | O(1)       | `PositionError`     |
//! | `get` / `get_mut`       | O(1)       | `PositionError`     |
//! | `iter` / `positions`    | O(n)       | —                   |
//!
//! Equality of positions is structural on (list id, node id) — two positions
//! holding equal element values are still distinct locations.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ds::chain::LinkChain;
use crate::ds::node_arena::NodeId;
use crate::error::PositionError;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque handle to one element's location in one list.
///
/// Valid only for the lifetime of the originating list instance; not
/// meaningful across lists and not serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    list: u64,
    node: NodeId,
}

/// Sequence container addressed by positions rather than indices.
#[derive(Debug)]
pub struct PositionalList<T> {
    chain: LinkChain<T>,
    id: u64,
}

impl<T> PositionalList<T> {
    /// Creates an empty list with a fresh container identity.
    pub fn new() -> Self {
        Self {
            chain: LinkChain::new(),
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Two-stage validation: container identity first, then node liveness.
    fn validate(&self, p: Position) -> Result<NodeId, PositionError> {
        if p.list != self.id {
            return Err(PositionError::WrongList);
        }
        if !self.chain.contains(p.node) {
            return Err(PositionError::Stale);
        }
        Ok(p.node)
    }

    /// Wraps a node id as a position, mapping sentinels to `None`.
    fn make_position(&self, id: NodeId) -> Option<Position> {
        if self.chain.is_sentinel(id) {
            None
        } else {
            Some(Position {
                list: self.id,
                node: id,
            })
        }
    }

    /// Returns the first position, or `None` if the list is empty.
    pub fn first(&self) -> Option<Position> {
        self.chain.first().and_then(|id| self.make_position(id))
    }

    /// Returns the last position, or `None` if the list is empty.
    pub fn last(&self) -> Option<Position> {
        self.chain.last().and_then(|id| self.make_position(id))
    }

    /// Returns the position just before `p`, or `None` if `p` is first.
    pub fn before(&self, p: Position) -> Result<Option<Position>, PositionError> {
        let node = self.validate(p)?;
        let prev = self.chain.prev(node).expect("live node has a prev link");
        Ok(self.make_position(prev))
    }

    /// Returns the position just after `p`, or `None` if `p` is last.
    pub fn after(&self, p: Position) -> Result<Option<Position>, PositionError> {
        let node = self.validate(p)?;
        let next = self.chain.next(node).expect("live node has a next link");
        Ok(self.make_position(next))
    }

    /// Returns the element at `p`.
    pub fn get(&self, p: Position) -> Result<&T, PositionError> {
        let node = self.validate(p)?;
        Ok(self
            .chain
            .element(node)
            .expect("validated node holds an element"))
    }

    /// Returns a mutable reference to the element at `p`.
    pub fn get_mut(&mut self, p: Position) -> Result<&mut T, PositionError> {
        let node = self.validate(p)?;
        Ok(self
            .chain
            .element_mut(node)
            .expect("validated node holds an element"))
    }

    /// Inserts `e` at the front and returns its position.
    pub fn add_first(&mut self, e: T) -> Position {
        Position {
            list: self.id,
            node: self.chain.push_front(e),
        }
    }

    /// Inserts `e` at the back and returns its position.
    pub fn add_last(&mut self, e: T) -> Position {
        Position {
            list: self.id,
            node: self.chain.push_back(e),
        }
    }

    /// Inserts `e` just before `p` and returns the new position.
    pub fn add_before(&mut self, p: Position, e: T) -> Result<Position, PositionError> {
        let node = self.validate(p)?;
        let pred = self.chain.prev(node).expect("live node has a prev link");
        Ok(Position {
            list: self.id,
            node: self.chain.insert_between(e, pred, node),
        })
    }

    /// Inserts `e` just after `p` and returns the new position.
    pub fn add_after(&mut self, p: Position, e: T) -> Result<Position, PositionError> {
        let node = self.validate(p)?;
        let succ = self.chain.next(node).expect("live node has a next link");
        Ok(Position {
            list: self.id,
            node: self.chain.insert_between(e, node, succ),
        })
    }

    /// Removes and returns the element at `p`. Any later use of `p` (or a
    /// copy of it) fails with [`PositionError::Stale`].
    pub fn delete(&mut self, p: Position) -> Result<T, PositionError> {
        let node = self.validate(p)?;
        Ok(self
            .chain
            .unlink(node)
            .expect("validated node can be unlinked"))
    }

    /// Overwrites the element at `p`, returning the previous element. `p`
    /// stays valid.
    pub fn replace(&mut self, p: Position, e: T) -> Result<T, PositionError> {
        let node = self.validate(p)?;
        let slot = self
            .chain
            .element_mut(node)
            .expect("validated node holds an element");
        Ok(std::mem::replace(slot, e))
    }

    /// Returns a lazy front-to-back iterator over the elements.
    ///
    /// The iterator borrows the list, so structural mutation during a walk
    /// is ruled out at compile time.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.first(),
        }
    }

    /// Returns a lazy front-to-back iterator over the positions.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            cursor: self.first(),
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.chain.debug_validate_invariants();
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back iterator over element references.
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    cursor: Option<Position>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.cursor?;
        let value = self.list.chain.element(p.node)?;
        self.cursor = self
            .list
            .chain
            .next(p.node)
            .and_then(|id| self.list.make_position(id));
        Some(value)
    }
}

/// Front-to-back iterator over positions.
pub struct Positions<'a, T> {
    list: &'a PositionalList<T>,
    cursor: Option<Position>,
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let p = self.cursor?;
        self.cursor = self
            .list
            .chain
            .next(p.node)
            .and_then(|id| self.list.make_position(id));
        Some(p)
    }
}

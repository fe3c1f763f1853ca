//! Id-keyed node storage with never-recycled ids.
//!
//! Each insertion mints a fresh `NodeId` from a monotonically increasing
//! counter; removed ids are never handed out again. A stale handle therefore
//! cannot alias a later node that happens to occupy "the same slot", which is
//! what lets the chain layer detect use-after-delete by a plain `contains`
//! check.

use rustc_hash::FxHashMap;

/// Opaque identifier of an arena entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Returns the raw numeric identifier for debugging or external maps.
    pub fn index(self) -> u64 {
        self.0
    }
}

/// Map-backed arena; removal frees the entry, ids are never reused.
#[derive(Debug)]
pub struct NodeArena<T> {
    nodes: FxHashMap<u64, T>,
    next_id: u64,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Inserts a value under a freshly minted id.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, value);
        NodeId(id)
    }

    /// Removes and returns the value at `id`, if live.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.nodes.remove(&id.0)
    }

    /// Returns the value at `id`, if live.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(&id.0)
    }

    /// Returns a mutable reference to the value at `id`, if live.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(&id.0)
    }

    /// Returns `true` if `id` refers to a live entry.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id.0)
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops all entries. The id counter is not reset, so ids stay unique
    /// across clears.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = NodeArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn ids_are_never_recycled() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        arena.remove(a);
        let b = arena.insert(2);
        assert_ne!(a, b);
        assert_ne!(a.index(), b.index());
        assert!(!arena.contains(a));
        assert!(arena.contains(b));
    }

    #[test]
    fn ids_stay_unique_across_clear() {
        let mut arena = NodeArena::new();
        let a = arena.insert(1);
        arena.clear();
        assert!(arena.is_empty());
        let b = arena.insert(2);
        assert_ne!(a, b);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut arena = NodeArena::new();
        let id = arena.insert(10);
        if let Some(value) = arena.get_mut(id) {
            *value = 20;
        }
        assert_eq!(arena.get(id), Some(&20));
    }
}

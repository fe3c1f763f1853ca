//! Sorted frequency-ranked list.
//!
//! Keeps its entries in non-increasing access-count order at all times, so
//! `top(k)` is just a prefix read. The price is paid on `access`, which
//! restores the order with an incremental insertion-sort step.
//!
//! ## Ordering invariant
//!
//! ```text
//!   front ──────────────────────────────────────────────► back
//!   ┌──────────┬──────────┬──────────┬──────────┬──────────┐
//!   │ ("a", 9) │ ("d", 7) │ ("b", 7) │ ("c", 2) │ ("e", 1) │
//!   └──────────┴──────────┴──────────┴──────────┴──────────┘
//!     counts non-increasing; equal counts keep the longer-resident
//!     entry ahead (stable tie-break)
//! ```
//!
//! ## Access flow
//!
//! ```text
//!   access(v)
//!     │ linear find from the front                         O(n)
//!     ├── absent → append (v, count 0) at the back
//!     │
//!     ▼ count += 1
//!   bubble toward the front past predecessors whose count is
//!   strictly smaller; stop at the first predecessor with
//!   count >= new count, or at the front                    O(distance moved)
//! ```
//!
//! This is one bounded relocation per access, not a full re-sort: the rest
//! of the list is already ordered, only the bumped entry can be out of
//! place, and it can only need to move forward.
//!
//! ## Operations
//!
//! | Method      | Complexity | Notes                               |
//! |-------------|------------|-------------------------------------|
//! | `access`    | O(n)       | find dominates; move is bounded     |
//! | `remove`    | O(n)       | linear find, no-op if absent        |
//! | `top(k)`    | O(k)       | prefix read off the sort invariant  |
//! | `len`       | O(1)       |                                     |

use crate::error::RangeError;
use crate::policy::{Entry, find_value};
use crate::positional::{Position, PositionalList};
use crate::traits::RankedList;

/// Frequency-ranked list kept sorted by non-increasing access count.
#[derive(Debug)]
pub struct CountRankedList<T> {
    data: PositionalList<Entry<T>>,
}

impl<T: PartialEq + Clone> CountRankedList<T> {
    /// Creates an empty ranking list.
    pub fn new() -> Self {
        Self {
            data: PositionalList::new(),
        }
    }

    /// Returns the number of tracked values.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no values are tracked.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Moves the entry at `p` toward the front until the sort invariant
    /// holds again. Stops at the first predecessor whose count is `>=` the
    /// entry's count, so equal-count neighbours are never overtaken.
    fn move_up(&mut self, p: Position) {
        let count = self.data.get(p).expect("accessed position is live").count;
        let Some(mut walk) = self.data.before(p).expect("accessed position is live") else {
            return;
        };
        if self.data.get(walk).expect("walked position is live").count >= count {
            return;
        }
        loop {
            match self.data.before(walk).expect("walked position is live") {
                Some(prev) if self.data.get(prev).expect("walked position is live").count < count => {
                    walk = prev;
                }
                _ => break,
            }
        }
        let entry = self.data.delete(p).expect("accessed position is live");
        self.data
            .add_before(walk, entry)
            .expect("walk position is live");
    }

    /// Records one access of `value`. A first access creates the entry with
    /// count 0 at the back before the increment, matching the relocation
    /// rule for every later access.
    pub fn access(&mut self, value: T) {
        let p = match find_value(&self.data, &value) {
            Some(p) => p,
            None => self.data.add_last(Entry { value, count: 0 }),
        };
        self.data
            .get_mut(p)
            .expect("position just resolved")
            .count += 1;
        self.move_up(p);
    }

    /// Drops the entry for `value`; no-op if it was never accessed.
    pub fn remove(&mut self, value: &T) {
        if let Some(p) = find_value(&self.data, value) {
            let _ = self.data.delete(p);
        }
    }

    /// Returns the `k` most-accessed values in rank order.
    pub fn top(&self, k: usize) -> Result<Vec<T>, RangeError> {
        if k < 1 || k > self.len() {
            return Err(RangeError { k, len: self.len() });
        }
        Ok(self
            .data
            .iter()
            .take(k)
            .map(|entry| entry.value.clone())
            .collect())
    }

    #[cfg(any(test, debug_assertions))]
    /// Asserts the non-increasing count invariant over the whole list.
    pub fn debug_validate_invariants(&self) {
        self.data.debug_validate_invariants();
        let mut last: Option<u64> = None;
        for entry in self.data.iter() {
            if let Some(prev) = last {
                assert!(prev >= entry.count, "counts must be non-increasing front to back");
            }
            last = Some(entry.count);
        }
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the (value, count) pairs in list order.
    pub fn debug_snapshot(&self) -> Vec<(T, u64)> {
        self.data
            .iter()
            .map(|entry| (entry.value.clone(), entry.count))
            .collect()
    }
}

impl<T: PartialEq + Clone> Default for CountRankedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + Clone> RankedList<T> for CountRankedList<T> {
    fn access(&mut self, value: T) {
        CountRankedList::access(self, value);
    }

    fn remove(&mut self, value: &T) {
        CountRankedList::remove(self, value);
    }

    fn top(&self, k: usize) -> Result<Vec<T>, RangeError> {
        CountRankedList::top(self, k)
    }

    fn len(&self) -> usize {
        CountRankedList::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_access_creates_with_count_one() {
        let mut list = CountRankedList::new();
        list.access("a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.debug_snapshot(), vec![("a", 1)]);
    }

    #[test]
    fn repeated_access_bumps_and_reorders() {
        let mut list = CountRankedList::new();
        list.access("a");
        list.access("b");
        list.access("a");
        assert_eq!(list.debug_snapshot(), vec![("a", 2), ("b", 1)]);
        assert_eq!(list.top(2), Ok(vec!["a", "b"]));
        list.debug_validate_invariants();
    }

    #[test]
    fn invariant_holds_under_mixed_accesses() {
        let mut list = CountRankedList::new();
        for value in ["c", "a", "b", "a", "c", "c", "b", "a", "a"] {
            list.access(value);
            list.debug_validate_invariants();
        }
        // a: 4, c: 3, b: 2
        assert_eq!(list.top(3), Ok(vec!["a", "c", "b"]));
    }

    #[test]
    fn tie_break_is_stable() {
        let mut list = CountRankedList::new();
        list.access("a");
        list.access("b");
        // Both now have count 1; "b" must not overtake the longer-resident
        // "a".
        assert_eq!(list.debug_snapshot(), vec![("a", 1), ("b", 1)]);
        list.access("b");
        list.access("a");
        // Both at 2; same rule.
        assert_eq!(list.debug_snapshot(), vec![("b", 2), ("a", 2)]);
    }

    #[test]
    fn top_rejects_out_of_range_k() {
        let mut list = CountRankedList::new();
        list.access("a");
        list.access("b");
        assert_eq!(list.top(0), Err(RangeError { k: 0, len: 2 }));
        assert_eq!(list.top(3), Err(RangeError { k: 3, len: 2 }));
        assert_eq!(list.top(1), Ok(vec!["a"]));
    }

    #[test]
    fn top_on_empty_list_fails() {
        let list: CountRankedList<&str> = CountRankedList::new();
        assert_eq!(list.top(1), Err(RangeError { k: 1, len: 0 }));
    }

    #[test]
    fn remove_drops_entry_and_ignores_unknown() {
        let mut list = CountRankedList::new();
        list.access("a");
        list.access("b");
        list.remove(&"a");
        assert_eq!(list.len(), 1);
        assert_eq!(list.top(1), Ok(vec!["b"]));

        list.remove(&"never-seen");
        assert_eq!(list.len(), 1);
        // A removed value starts over on re-access.
        list.access("a");
        assert_eq!(list.debug_snapshot(), vec![("b", 1), ("a", 1)]);
    }

    #[test]
    fn works_through_the_trait() {
        let mut list: Box<dyn RankedList<&str>> = Box::new(CountRankedList::new());
        list.access("x");
        list.access("x");
        list.access("y");
        assert_eq!(list.len(), 2);
        assert_eq!(list.top(1), Ok(vec!["x"]));
        assert!(!list.is_empty());
    }
}

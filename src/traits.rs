//! Shared contract of the frequency-ranking policies.
//!
//! Both ranking lists expose exactly the same operation set and differ only
//! in how they keep (or approximate) rank order internally:
//!
//! ```text
//!                  ┌──────────────────────────────────────┐
//!                  │          RankedList<T>               │
//!                  │                                      │
//!                  │  access(&mut, T)                     │
//!                  │  remove(&mut, &T)                    │
//!                  │  top(&, k) → Result<Vec<T>, Range>   │
//!                  │  len(&) → usize                      │
//!                  │  is_empty(&) → bool                  │
//!                  └──────────────┬───────────────────────┘
//!                                 │
//!              ┌──────────────────┴──────────────────┐
//!              ▼                                     ▼
//!   ┌─────────────────────────┐         ┌─────────────────────────┐
//!   │  CountRankedList<T>     │         │  MtfRankedList<T>       │
//!   │                         │         │                         │
//!   │  order = count rank     │         │  order ≈ recency        │
//!   │  access: O(move dist)   │         │  access: O(n) find,     │
//!   │  top(k): O(k)           │         │          O(1) relocate  │
//!   │                         │         │  top(k): O(k·n)         │
//!   └─────────────────────────┘         └─────────────────────────┘
//! ```
//!
//! The trade-off is the classic write-heavy vs read-heavy split: the sorted
//! variant pays on `access` to keep `top` a prefix read, the move-to-front
//! variant keeps `access` relocation O(1) and pays on `top`.
//!
//! Raw access counts are deliberately not part of the contract; callers see
//! only values and ranks.

use crate::error::RangeError;

/// A list of values ranked by how often each has been accessed.
///
/// Values are unique within a list: the first `access` of a value creates
/// its entry, later ones bump its count. The trait is object safe, so a
/// policy can be chosen at runtime behind `dyn RankedList<T>`.
pub trait RankedList<T> {
    /// Records one access of `value`, creating its entry on first sight.
    fn access(&mut self, value: T);

    /// Drops the entry for `value`; no-op if it was never accessed.
    fn remove(&mut self, value: &T);

    /// Returns the `k` most-accessed values, best first.
    ///
    /// Fails with [`RangeError`] unless `1 <= k <= len`.
    fn top(&self, k: usize) -> Result<Vec<T>, RangeError>;

    /// Returns the number of tracked values.
    fn len(&self) -> usize;

    /// Returns `true` if no values are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

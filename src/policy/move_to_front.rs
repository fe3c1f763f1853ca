//! Move-to-front frequency-ranked list.
//!
//! Same contract as [`CountRankedList`](crate::policy::CountRankedList), but
//! an accessed entry is relocated straight to the front regardless of its
//! count. List order then approximates recency, most recent first, and says
//! nothing about rank — so `top(k)` has to compute rank on demand from a
//! scratch copy.
//!
//! ## Access flow
//!
//! ```text
//!   access(v)
//!     │ linear find from the front                    O(n)
//!     ├── absent → append (v, count 0) at the back
//!     ▼ count += 1
//!   relocate unconditionally to the front             O(1)
//! ```
//!
//! ## top(k) flow
//!
//! ```text
//!   copy all entries into a scratch list              O(n)
//!   k times:
//!     scan the scratch for the max count              O(n)
//!     report its value, delete it from the scratch
//!                                             total   O(k·n)
//! ```
//!
//! The classic policy trade against the sorted variant: cheaper relocation
//! on every access, more expensive rank queries.

use crate::error::RangeError;
use crate::policy::{Entry, find_value};
use crate::positional::PositionalList;
use crate::traits::RankedList;

/// Frequency-ranked list using the move-to-front heuristic.
#[derive(Debug)]
pub struct MtfRankedList<T> {
    data: PositionalList<Entry<T>>,
}

impl<T: PartialEq + Clone> MtfRankedList<T> {
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

    /// Records one access of `value` and moves its entry to the front.
    pub fn access(&mut self, value: T) {
        let p = match find_value(&self.data, &value) {
            Some(p) => p,
            None => self.data.add_last(Entry { value, count: 0 }),
        };
        self.data
            .get_mut(p)
            .expect("position just resolved")
            .count += 1;
        if self.data.first() != Some(p) {
            let entry = self.data.delete(p).expect("accessed position is live");
            self.data.add_first(entry);
        }
    }

    /// Drops the entry for `value`; no-op if it was never accessed.
    pub fn remove(&mut self, value: &T) {
        if let Some(p) = find_value(&self.data, value) {
            let _ = self.data.delete(p);
        }
    }

    /// Returns the `k` most-accessed values, best first.
    ///
    /// List order does not reflect rank here, so this builds a scratch copy
    /// and extracts the maximum count `k` times.
    pub fn top(&self, k: usize) -> Result<Vec<T>, RangeError> {
        if k < 1 || k > self.len() {
            return Err(RangeError { k, len: self.len() });
        }

        let mut scratch: PositionalList<Entry<T>> = PositionalList::new();
        for entry in self.data.iter() {
            scratch.add_last(entry.clone());
        }

        let mut out = Vec::with_capacity(k);
        for _ in 0..k {
            let mut best = scratch.first().expect("scratch holds at least k entries");
            let mut walk = scratch.after(best).expect("best position is live");
            while let Some(p) = walk {
                let candidate = scratch.get(p).expect("walked position is live").count;
                if candidate > scratch.get(best).expect("best position is live").count {
                    best = p;
                }
                walk = scratch.after(p).expect("walked position is live");
            }
            let entry = scratch.delete(best).expect("best position is live");
            out.push(entry.value);
        }
        Ok(out)
    }

    #[cfg(any(test, debug_assertions))]
    /// Returns the (value, count) pairs in list order (most recent first).
    pub fn debug_snapshot(&self) -> Vec<(T, u64)> {
        self.data
            .iter()
            .map(|entry| (entry.value.clone(), entry.count))
            .collect()
    }
}

impl<T: PartialEq + Clone> Default for MtfRankedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + Clone> RankedList<T> for MtfRankedList<T> {
    fn access(&mut self, value: T) {
        MtfRankedList::access(self, value);
    }

    fn remove(&mut self, value: &T) {
        MtfRankedList::remove(self, value);
    }

    fn top(&self, k: usize) -> Result<Vec<T>, RangeError> {
        MtfRankedList::top(self, k)
    }

    fn len(&self) -> usize {
        MtfRankedList::len(self)
    }
}

//! Lock-per-container wrapper around a ranking list.
//!
//! The core ranking lists assume exclusive single-writer access. When a
//! shared handle is needed, this wrapper layers exactly the synchronization
//! the core calls for: one `parking_lot::Mutex` per container, with blocking
//! and non-blocking (`try_`) variants of every operation. A `Mutex` rather
//! than an `RwLock`: even `top(k)` is the only read-shaped operation, and
//! `access` dominates real workloads.

use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::error::RangeError;
use crate::traits::RankedList;

/// Thread-safe wrapper holding a ranking list behind one exclusive lock.
#[derive(Debug)]
pub struct ConcurrentRankedList<T, L> {
    inner: Mutex<L>,
    _values: PhantomData<fn(T) -> T>,
}

impl<T, L: RankedList<T>> ConcurrentRankedList<T, L> {
    /// Wraps an existing ranking list.
    pub fn new(inner: L) -> Self {
        Self {
            inner: Mutex::new(inner),
            _values: PhantomData,
        }
    }

    /// Unwraps the inner ranking list.
    pub fn into_inner(self) -> L {
        self.inner.into_inner()
    }

    /// Records one access of `value`.
    pub fn access(&self, value: T) {
        self.inner.lock().access(value);
    }

    /// Tries to record an access without blocking; hands the value back if
    /// the lock is contended.
    pub fn try_access(&self, value: T) -> Result<(), T> {
        match self.inner.try_lock() {
            Some(mut list) => {
                list.access(value);
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Drops the entry for `value`; no-op if it was never accessed.
    pub fn remove(&self, value: &T) {
        self.inner.lock().remove(value);
    }

    /// Tries to drop the entry for `value` without blocking; returns
    /// `false` if the lock is contended.
    pub fn try_remove(&self, value: &T) -> bool {
        match self.inner.try_lock() {
            Some(mut list) => {
                list.remove(value);
                true
            }
            None => false,
        }
    }

    /// Returns the `k` most-accessed values, best first.
    pub fn top(&self, k: usize) -> Result<Vec<T>, RangeError> {
        self.inner.lock().top(k)
    }

    /// Tries to read the top `k` without blocking.
    pub fn try_top(&self, k: usize) -> Option<Result<Vec<T>, RangeError>> {
        let list = self.inner.try_lock()?;
        Some(list.top(k))
    }

    /// Returns the number of tracked values.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no values are tracked.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` under the lock with direct access to the inner list.
    pub fn with<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CountRankedList, MtfRankedList};

    #[test]
    fn blocking_ops_mirror_the_inner_list() {
        let list = ConcurrentRankedList::new(CountRankedList::new());
        list.access("a");
        list.access("a");
        list.access("b");
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.top(2), Ok(vec!["a", "b"]));

        list.remove(&"a");
        assert_eq!(list.top(1), Ok(vec!["b"]));
    }

    #[test]
    fn try_ops_succeed_when_uncontended() {
        let list = ConcurrentRankedList::new(MtfRankedList::new());
        assert_eq!(list.try_access("x"), Ok(()));
        assert_eq!(list.try_access("x"), Ok(()));
        assert_eq!(list.try_top(1), Some(Ok(vec!["x"])));
        assert!(list.try_remove(&"x"));
        assert!(list.is_empty());
    }

    #[test]
    fn try_ops_fail_while_lock_is_held() {
        let list = ConcurrentRankedList::new(CountRankedList::new());
        list.access(1u32);
        list.with(|inner| {
            // `with` holds the lock for the duration of the closure, so a
            // reentrant try must fail and hand the value back.
            assert_eq!(list.try_access(2), Err(2));
            assert_eq!(list.try_top(1), None);
            assert!(!list.try_remove(&1));
            inner.access(3);
        });
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn into_inner_returns_the_list() {
        let list = ConcurrentRankedList::new(CountRankedList::new());
        list.access("a");
        let inner = list.into_inner();
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let list = Arc::new(ConcurrentRankedList::new(CountRankedList::new()));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let list = Arc::clone(&list);
            handles.push(std::thread::spawn(move || {
                for value in 0u32..50 {
                    list.access(value % 5);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(list.len(), 5);
        // 4 threads x 50 accesses spread over 5 values; every value was
        // accessed 40 times, so any of them is a valid top-1.
        let top = list.top(5).unwrap();
        assert_eq!(top.len(), 5);
    }
}

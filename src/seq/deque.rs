//! Double-ended queue over the chain engine.
//!
//! Insertion and deletion at both ends are O(1) splices next to the
//! sentinels. Accessors and deleters fail with [`EmptyError`] on an empty
//! deque.

use crate::ds::chain::LinkChain;
use crate::error::EmptyError;

/// Linked double-ended queue.
#[derive(Debug)]
pub struct LinkedDeque<T> {
    chain: LinkChain<T>,
}

impl<T> LinkedDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self {
            chain: LinkChain::new(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Returns the front element.
    pub fn first(&self) -> Result<&T, EmptyError> {
        let id = self.chain.first().ok_or(EmptyError)?;
        Ok(self.chain.element(id).expect("first node holds an element"))
    }

    /// Returns the back element.
    pub fn last(&self) -> Result<&T, EmptyError> {
        let id = self.chain.last().ok_or(EmptyError)?;
        Ok(self.chain.element(id).expect("last node holds an element"))
    }

    /// Inserts `e` at the front.
    pub fn insert_first(&mut self, e: T) {
        self.chain.push_front(e);
    }

    /// Inserts `e` at the back.
    pub fn insert_last(&mut self, e: T) {
        self.chain.push_back(e);
    }

    /// Removes and returns the front element.
    pub fn delete_first(&mut self) -> Result<T, EmptyError> {
        let id = self.chain.first().ok_or(EmptyError)?;
        Ok(self.chain.unlink(id).expect("first node is live"))
    }

    /// Removes and returns the back element.
    pub fn delete_last(&mut self) -> Result<T, EmptyError> {
        let id = self.chain.last().ok_or(EmptyError)?;
        Ok(self.chain.unlink(id).expect("last node is live"))
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! LIFO stack over the chain engine.
//!
//! The top of the stack is the front of the chain; push and pop are O(1)
//! splices next to the header. Element-guaranteeing accessors fail with
//! [`EmptyError`] on an empty stack.

use crate::ds::chain::LinkChain;
use crate::error::EmptyError;

/// Linked LIFO stack.
#[derive(Debug)]
pub struct LinkedStack<T> {
    chain: LinkChain<T>,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            chain: LinkChain::new(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Pushes `e` onto the top of the stack.
    pub fn push(&mut self, e: T) {
        self.chain.push_front(e);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        let id = self.chain.first().ok_or(EmptyError)?;
        Ok(self.chain.unlink(id).expect("first node is live"))
    }

    /// Returns the top element without removing it.
    pub fn top(&self) -> Result<&T, EmptyError> {
        let id = self.chain.first().ok_or(EmptyError)?;
        Ok(self.chain.element(id).expect("first node holds an element"))
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.top(), Ok(&3));
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_stack_errors() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        assert_eq!(stack.pop(), Err(EmptyError));
        assert_eq!(stack.top(), Err(EmptyError));
    }

    #[test]
    fn usable_after_drain() {
        let mut stack = LinkedStack::new();
        stack.push("a");
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(EmptyError));
        stack.push("b");
        assert_eq!(stack.top(), Ok(&"b"));
    }
}

//! FIFO queue over the chain engine, with circular rotation.
//!
//! The front of the queue is the front of the chain; enqueue splices before
//! the trailer, dequeue unlinks after the header. `rotate` relinks the front
//! node to the back in O(1) without reallocating it, the circular-queue
//! pointer rotation.

use crate::ds::chain::LinkChain;
use crate::error::EmptyError;

/// Linked FIFO queue.
#[derive(Debug)]
pub struct LinkedQueue<T> {
    chain: LinkChain<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            chain: LinkChain::new(),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Appends `e` at the back of the queue.
    pub fn enqueue(&mut self, e: T) {
        self.chain.push_back(e);
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        let id = self.chain.first().ok_or(EmptyError)?;
        Ok(self.chain.unlink(id).expect("first node is live"))
    }

    /// Returns the front element without removing it.
    pub fn first(&self) -> Result<&T, EmptyError> {
        let id = self.chain.first().ok_or(EmptyError)?;
        Ok(self.chain.element(id).expect("first node holds an element"))
    }

    /// Moves the front element to the back; no-op when the queue holds at
    /// most one element.
    pub fn rotate(&mut self) {
        if self.len() <= 1 {
            return;
        }
        let id = self.chain.first().expect("non-empty queue has a first node");
        self.chain.move_to_back(id);
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_dequeue_is_fifo() {
        let mut queue = LinkedQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(queue.first(), Ok(&"a"));
        assert_eq!(queue.dequeue(), Ok("a"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue: LinkedQueue<u8> = LinkedQueue::new();
        assert_eq!(queue.dequeue(), Err(EmptyError));
        assert_eq!(queue.first(), Err(EmptyError));
    }

    #[test]
    fn rotate_cycles_front_to_back() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        queue.rotate();
        assert_eq!(queue.first(), Ok(&2));
        queue.rotate();
        assert_eq!(queue.first(), Ok(&3));
        queue.rotate();
        assert_eq!(queue.first(), Ok(&1));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn rotate_on_small_queues_is_noop() {
        let mut queue: LinkedQueue<i32> = LinkedQueue::new();
        queue.rotate();
        assert!(queue.is_empty());

        queue.enqueue(7);
        queue.rotate();
        assert_eq!(queue.first(), Ok(&7));
        assert_eq!(queue.len(), 1);
    }
}

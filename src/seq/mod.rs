pub mod deque;
pub mod queue;
pub mod stack;

pub use deque::LinkedDeque;
pub use queue::LinkedQueue;
pub use stack::LinkedStack;

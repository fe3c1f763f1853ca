pub use crate::error::{EmptyError, PositionError, RangeError};
pub use crate::policy::{CountRankedList, MtfRankedList};
pub use crate::positional::{Position, PositionalList};
pub use crate::seq::{LinkedDeque, LinkedQueue, LinkedStack};
pub use crate::traits::RankedList;

#[cfg(feature = "concurrency")]
pub use crate::policy::ConcurrentRankedList;

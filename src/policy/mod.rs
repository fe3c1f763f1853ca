pub mod count_ranked;
pub mod move_to_front;

#[cfg(feature = "concurrency")]
pub mod concurrent;

pub use count_ranked::CountRankedList;
pub use move_to_front::MtfRankedList;

#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentRankedList;

use crate::positional::{Position, PositionalList};

/// One tracked value with its access count. Private to the policy layer;
/// the public contract never exposes raw counts.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) count: u64,
}

/// Linear front-to-back search for the entry holding `value`.
pub(crate) fn find_value<T: PartialEq>(
    data: &PositionalList<Entry<T>>,
    value: &T,
) -> Option<Position> {
    let mut walk = data.first();
    while let Some(p) = walk {
        if data.get(p).expect("walked position is live").value == *value {
            return Some(p);
        }
        walk = data.after(p).expect("walked position is live");
    }
    None
}

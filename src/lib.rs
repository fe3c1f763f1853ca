//! listkit: positional lists and access-frequency ranking primitives.
//!
//! The crate is layered bottom-up: `ds` holds the node arena and the
//! sentinel-bounded chain engine, `positional` exposes the position-handle
//! sequence ADT on top of it, `policy` builds the two frequency-ranking
//! policies over the positional list, and `seq` provides the linked
//! stack/queue/deque adapters.

pub mod ds;
pub mod error;
pub mod policy;
pub mod positional;
pub mod prelude;
pub mod seq;
pub mod traits;

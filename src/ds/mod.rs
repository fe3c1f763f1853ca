pub mod chain;
pub mod node_arena;

pub use chain::LinkChain;
pub use node_arena::{NodeArena, NodeId};

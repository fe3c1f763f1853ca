//! Error types for the listkit library.
//!
//! ## Key Components
//!
//! - [`PositionError`]: Returned when a [`Position`](crate::positional::Position)
//!   handed to a list fails validation — either it belongs to a different list
//!   or its node has since been deleted.
//! - [`EmptyError`]: Returned by stack/queue/deque accessors that promise an
//!   element (`top`, `first`, `pop`, ...) when the container is empty.
//! - [`RangeError`]: Returned by `top(k)` on the ranking lists when `k` is
//!   outside `[1, len]`.
//!
//! All three are deterministic caller-contract violations: none is transient,
//! none is recovered internally, and a failing operation never leaves the
//! container partially mutated.

use std::fmt;

// ---------------------------------------------------------------------------
// PositionError
// ---------------------------------------------------------------------------

/// Error returned when a position fails validation.
///
/// Every position-taking operation on
/// [`PositionalList`](crate::positional::PositionalList) runs the same
/// two-stage check before touching the chain: the container identity first,
/// then node liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// The position was created by a different list instance.
    WrongList,
    /// The position's node has been deleted from its list.
    Stale,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::WrongList => f.write_str("position belongs to a different list"),
            PositionError::Stale => f.write_str("position no longer refers to a live entry"),
        }
    }
}

impl std::error::Error for PositionError {}

// ---------------------------------------------------------------------------
// EmptyError
// ---------------------------------------------------------------------------

/// Error returned when an element-guaranteeing accessor is called on an
/// empty container.
///
/// Produced by the `seq` adapters ([`LinkedStack::pop`](crate::seq::LinkedStack::pop),
/// [`LinkedDeque::first`](crate::seq::LinkedDeque::first), ...). The
/// positional list itself never fails on emptiness; its `first`/`last`
/// return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("container is empty")
    }
}

impl std::error::Error for EmptyError {}

// ---------------------------------------------------------------------------
// RangeError
// ---------------------------------------------------------------------------

/// Error returned when `top(k)` is called with `k` outside `[1, len]`.
///
/// Carries the offending `k` and the list length at the time of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    /// The requested rank count.
    pub k: usize,
    /// The list length when the request was made.
    pub len: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k must be between 1 and {}, got {}", self.len, self.k)
    }
}

impl std::error::Error for RangeError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

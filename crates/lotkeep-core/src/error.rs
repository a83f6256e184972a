//! # Error Types
//!
//! Construction-time faults for lotkeep value types. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! These errors represent caller programming mistakes (a blank identity,
//! a negative capacity). Runtime allocation outcomes such as a full pool
//! or a stale ticket are never errors; they are `Option`/`bool` results
//! on the allocator itself.

use thiserror::Error;

/// Error raised while constructing a core value type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Client identifiers must contain at least one non-whitespace character.
    #[error("client identifier must not be empty or whitespace-only")]
    BlankClientId,

    /// A pool cannot hold a negative number of lots.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// A pool cannot hold more than `MAX_LOTS` lots.
    #[error("capacity {0} exceeds the limit of {max} lots", max = crate::capacity::MAX_LOTS)]
    CapacityOverflow(u64),

    /// The string does not name a size class.
    #[error("unknown size class: {0:?}")]
    UnknownSizeClass(String),

    /// The string does not name a vehicle kind.
    #[error("unknown vehicle kind: {0:?}")]
    UnknownVehicleKind(String),
}

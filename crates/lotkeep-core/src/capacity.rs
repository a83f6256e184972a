//! # Capacity
//!
//! A validated lot count in `0..=MAX_LOTS`. Capacities usually arrive as
//! signed integers (flags, config files, host applications). A negative or
//! oversized count is a programming error on the caller's side. It is
//! rejected here, once, so that pool construction downstream is infallible
//! and never attempts an allocation the process cannot satisfy.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Largest number of lots a single pool may hold.
pub const MAX_LOTS: usize = 1 << 20;

/// Number of lots in a pool. Always within `0..=MAX_LOTS`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u64")]
pub struct Capacity(usize);

impl Capacity {
    /// Validate a signed lot count.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NegativeCapacity`] if `count < 0`.
    /// - [`CoreError::CapacityOverflow`] if `count > MAX_LOTS`.
    pub fn new(count: i64) -> Result<Self, CoreError> {
        let count = u64::try_from(count).map_err(|_| CoreError::NegativeCapacity(count))?;
        Self::bounded(count)
    }

    fn bounded(count: u64) -> Result<Self, CoreError> {
        match usize::try_from(count) {
            Ok(n) if n <= MAX_LOTS => Ok(Self(n)),
            _ => Err(CoreError::CapacityOverflow(count)),
        }
    }

    /// The lot count.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Whether this capacity admits no lots at all.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for Capacity {
    type Error = CoreError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl TryFrom<usize> for Capacity {
    type Error = CoreError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::bounded(count as u64)
    }
}

impl From<Capacity> for u64 {
    fn from(capacity: Capacity) -> Self {
        capacity.0 as u64
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

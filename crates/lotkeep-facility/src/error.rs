//! # Facility Errors
//!
//! Construction-time failures for pools and dispatchers. Allocation and
//! release outcomes are not errors and never appear here.

use thiserror::Error;

use lotkeep_core::{CoreError, SizeClass};

/// Error raised while building a pool or a dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacilityError {
    /// A per-class capacity was rejected.
    #[error("invalid {size_class} capacity: {source}")]
    Capacity {
        /// The size class whose capacity was rejected.
        size_class: SizeClass,
        /// The underlying validation failure.
        #[source]
        source: CoreError,
    },

    /// A core value failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FacilityError {
    /// Attach the size class to a capacity validation failure.
    pub(crate) fn capacity(size_class: SizeClass, source: CoreError) -> Self {
        Self::Capacity { size_class, source }
    }
}

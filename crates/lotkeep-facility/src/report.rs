//! # Occupancy Reports
//!
//! Point-in-time snapshots of a pool's occupancy, cheap to copy out from
//! behind a lock and serializable for hosts that publish them.

use serde::{Deserialize, Serialize};

use lotkeep_core::SizeClass;

/// Occupancy of one size class at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyReport {
    /// The pool's size class.
    pub size_class: SizeClass,
    /// Total lots in the pool.
    pub capacity: usize,
    /// Lots currently occupied.
    pub occupied: usize,
    /// Lots currently free.
    pub available: usize,
}

impl OccupancyReport {
    /// Whether every lot is taken.
    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }
}

impl std::fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.size_class, self.occupied, self.capacity)
    }
}

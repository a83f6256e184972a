//! # lotkeep-facility — Pools and Dispatch
//!
//! Builds the allocator out of the lot and ticket state machines:
//!
//! - **`LotTracker`** (`tracker.rs`): fixed-capacity pool for one size
//!   class. First-fit allocation, ticket-checked release, and an occupied
//!   count that never leaves `0..=capacity`.
//!
//! - **`LotManager`** (`manager.rs`): one tracker per size class; routes a
//!   client or ticket to the tracker of its size class.
//!
//! - **`SharedLotManager`** (`shared.rs`): the same dispatch behind one
//!   mutex per size class, for hosts with more than one gate.
//!
//! ## Outcomes vs. Errors
//!
//! Only construction can fail (a negative capacity). A full pool, a size
//! mismatch, a spent or foreign ticket are ordinary answers: `None` from
//! allocation, `false` from release. Nothing is retried internally.

pub mod error;
pub mod manager;
pub mod report;
pub mod shared;
pub mod tracker;

pub use error::FacilityError;
pub use manager::{FacilityCapacities, LotManager};
pub use report::OccupancyReport;
pub use shared::SharedLotManager;
pub use tracker::LotTracker;

pub use lotkeep_core::{Client, SizeClass, VehicleKind};
pub use lotkeep_state::Ticket;

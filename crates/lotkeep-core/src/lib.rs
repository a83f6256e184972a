//! # lotkeep-core — Foundational Types for lotkeep
//!
//! This crate defines the value types every other lotkeep crate builds on.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed size classes.** `SizeClass` is the single tag used to match
//!    clients to lots. Exact equality is the only comparison the allocator
//!    performs: no ordering, no coercion.
//!
//! 2. **Newtype wrappers for identifiers.** `ClientId`, `LotId`, `TicketId`
//!    are distinct types. A `ClientId` cannot be blank; the check happens
//!    once, at construction, and never again downstream.
//!
//! 3. **One client type.** `Client` is an identity plus a size-class tag.
//!    `VehicleKind` names the familiar vehicle categories and maps each to
//!    its size class.
//!
//! 4. **Validated capacities.** `Capacity` rejects negative and oversized
//!    counts at the boundary so pool construction itself cannot fail.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lotkeep-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod capacity;
pub mod error;
pub mod identity;
pub mod size;
pub mod temporal;
pub mod vehicle;

// Re-export primary types for ergonomic imports.
pub use capacity::{Capacity, MAX_LOTS};
pub use error::CoreError;
pub use identity::{ClientId, LotId, TicketId};
pub use size::{SizeClass, SIZE_CLASS_COUNT};
pub use temporal::Timestamp;
pub use vehicle::{Client, VehicleKind};

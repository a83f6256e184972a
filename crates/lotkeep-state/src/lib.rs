//! # lotkeep-state — Lot and Ticket State Machines
//!
//! The two state machines at the heart of lotkeep.
//!
//! ## State Machines
//!
//! - **Lot** (`lot.rs`): `Available ⇄ Occupied(client)`. Reservation checks
//!   availability and size class; release checks the presented ticket
//!   against the lot's index, current occupant, and size class.
//!
//! - **Ticket** (`ticket.rs`): `Valid → Redeemed`. One-way, and only ever
//!   taken by a successful lot release, in the same call.
//!
//! ## Design
//!
//! Every transition is check-then-act. The `check_*` methods report why a
//! transition would be refused without touching state; the mutating methods
//! run the same checks and only write once all of them pass. A failed call
//! therefore never leaves partial state behind.

pub mod lot;
pub mod ticket;

pub use lot::{Lot, Occupancy, ReleaseRefusal, ReserveRefusal};
pub use ticket::{Ticket, TicketStatus};

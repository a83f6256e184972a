//! # Lot Occupancy State Machine
//!
//! A lot is one slot of a fixed size class.
//!
//! ## States
//!
//! ```text
//! Available ──reserve──▶ Occupied(client) ──release(ticket)──▶ Available
//! ```
//!
//! No other transitions exist. A failed `reserve` or `release` changes
//! nothing: every precondition is checked before anything is written.
//!
//! ## Release Checks
//!
//! A ticket frees a lot only if it names this lot, names the client
//! currently parked here, carries this lot's size class, and has not been
//! redeemed. The client check is what stops a stale ticket from freeing a
//! lot that has since been handed to someone else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lotkeep_core::{Client, ClientId, LotId, SizeClass};

use crate::ticket::Ticket;

// ─── Occupancy ───────────────────────────────────────────────────────

/// Occupancy of a lot. The occupant exists exactly when the lot is occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "occupant", rename_all = "snake_case")]
pub enum Occupancy {
    /// Free for any client of the lot's size class.
    Available,
    /// Held by the given client.
    Occupied(ClientId),
}

impl Occupancy {
    /// Whether the lot is free.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => f.write_str("AVAILABLE"),
            Self::Occupied(_) => f.write_str("OCCUPIED"),
        }
    }
}

// ─── Refusals ────────────────────────────────────────────────────────

/// Why a lot refused a reservation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReserveRefusal {
    /// Someone is already parked here.
    #[error("lot is already occupied")]
    Occupied,

    /// The client needs a different size class.
    #[error("client needs a {client} lot, this lot is {lot}")]
    SizeMismatch {
        /// The lot's size class.
        lot: SizeClass,
        /// The client's size class.
        client: SizeClass,
    },
}

/// Why a lot refused to honor a ticket.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReleaseRefusal {
    /// The ticket was already redeemed.
    #[error("ticket already redeemed")]
    TicketRedeemed,

    /// Nobody is parked here.
    #[error("lot is not occupied")]
    NotOccupied,

    /// The ticket was issued for another lot.
    #[error("ticket is for {ticket}, not {lot}")]
    WrongLot {
        /// This lot.
        lot: LotId,
        /// The lot named on the ticket.
        ticket: LotId,
    },

    /// The lot is held by a different client than the one on the ticket.
    #[error("ticket was issued to a different client than the occupant")]
    WrongClient,

    /// The ticket carries another size class.
    #[error("ticket is for a {ticket} lot, this lot is {lot}")]
    SizeMismatch {
        /// The lot's size class.
        lot: SizeClass,
        /// The size class on the ticket.
        ticket: SizeClass,
    },
}

// ─── Lot ─────────────────────────────────────────────────────────────

/// One slot of a fixed size class.
#[derive(Debug, Clone, Serialize)]
pub struct Lot {
    id: LotId,
    size_class: SizeClass,
    occupancy: Occupancy,
}

impl Lot {
    /// Create an available lot.
    pub fn new(id: LotId, size_class: SizeClass) -> Self {
        Self {
            id,
            size_class,
            occupancy: Occupancy::Available,
        }
    }

    /// The lot's index within its pool.
    pub fn id(&self) -> LotId {
        self.id
    }

    /// The lot's size class.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Current occupancy.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Whether the lot is free.
    pub fn is_available(&self) -> bool {
        self.occupancy.is_available()
    }

    /// The client parked here, if any.
    pub fn occupant(&self) -> Option<&ClientId> {
        match &self.occupancy {
            Occupancy::Available => None,
            Occupancy::Occupied(client) => Some(client),
        }
    }

    /// Check whether `client` may park here, without changing anything.
    pub fn check_reserve(&self, client: &Client) -> Result<(), ReserveRefusal> {
        if !self.is_available() {
            return Err(ReserveRefusal::Occupied);
        }
        if client.size_class() != self.size_class {
            return Err(ReserveRefusal::SizeMismatch {
                lot: self.size_class,
                client: client.size_class(),
            });
        }
        Ok(())
    }

    /// Park `client` here (AVAILABLE → OCCUPIED).
    ///
    /// Returns `false`, leaving the lot untouched, if it is occupied or
    /// the client's size class differs.
    pub fn reserve(&mut self, client: &Client) -> bool {
        if self.check_reserve(client).is_err() {
            return false;
        }
        self.occupancy = Occupancy::Occupied(client.id().clone());
        true
    }

    /// Check whether `ticket` would free this lot, without changing anything.
    pub fn check_release(&self, ticket: &Ticket) -> Result<(), ReleaseRefusal> {
        if !ticket.is_valid() {
            return Err(ReleaseRefusal::TicketRedeemed);
        }
        let occupant = self.occupant().ok_or(ReleaseRefusal::NotOccupied)?;
        if ticket.lot_id() != self.id {
            return Err(ReleaseRefusal::WrongLot {
                lot: self.id,
                ticket: ticket.lot_id(),
            });
        }
        if ticket.client_id() != occupant {
            return Err(ReleaseRefusal::WrongClient);
        }
        if ticket.size_class() != self.size_class {
            return Err(ReleaseRefusal::SizeMismatch {
                lot: self.size_class,
                ticket: ticket.size_class(),
            });
        }
        Ok(())
    }

    /// Free the lot and redeem `ticket` (OCCUPIED → AVAILABLE).
    ///
    /// Both happen in this one call. If any check fails, neither the lot
    /// nor the ticket changes.
    pub fn release(&mut self, ticket: &mut Ticket) -> bool {
        if self.check_release(ticket).is_err() {
            return false;
        }
        self.occupancy = Occupancy::Available;
        ticket.redeem()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

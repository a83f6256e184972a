//! # Lot Tracker — Fixed-Capacity Pool for One Size Class
//!
//! A tracker owns every lot of one size class, numbered `0..capacity` at
//! construction, and keeps a running count of occupied lots.
//!
//! ## Allocation
//!
//! First fit by ascending index. The occupied count is checked before the
//! scan so a full pool answers without touching its lots. The lowest free
//! index always wins, which keeps lot assignment reproducible.
//!
//! ## Release
//!
//! The ticket's lot index selects the lot directly; the lot then verifies
//! the ticket against its current occupant and redeems it.
//!
//! ## Invariants
//!
//! - `0 <= occupied <= capacity`.
//! - `occupied` equals the number of lots that are not available.
//! - Every ticket a tracker issues carries the tracker's size class.
//!
//! Not thread-safe on its own: mutation takes `&mut self`. See
//! [`crate::SharedLotManager`] for the locked facade.

use tracing::{debug, warn};

use lotkeep_core::{Capacity, Client, LotId, SizeClass};
use lotkeep_state::{Lot, Ticket};

use crate::error::FacilityError;
use crate::report::OccupancyReport;

/// A fixed-capacity pool of lots of a single size class.
#[derive(Debug, Clone)]
pub struct LotTracker {
    size_class: SizeClass,
    capacity: Capacity,
    lots: Vec<Lot>,
    occupied: usize,
}

impl LotTracker {
    /// Create a pool of `capacity` available lots with indices `0..capacity`.
    pub fn new(capacity: Capacity, size_class: SizeClass) -> Self {
        let lots = (0..capacity.get())
            .map(|index| Lot::new(LotId(index), size_class))
            .collect();
        Self {
            size_class,
            capacity,
            lots,
            occupied: 0,
        }
    }

    /// Create a pool from a signed lot count.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::Capacity`] if `count` is negative or exceeds
    /// [`lotkeep_core::MAX_LOTS`].
    pub fn with_capacity(count: i64, size_class: SizeClass) -> Result<Self, FacilityError> {
        let capacity =
            Capacity::new(count).map_err(|e| FacilityError::capacity(size_class, e))?;
        Ok(Self::new(capacity, size_class))
    }

    /// Park `client` in the lowest-numbered free lot.
    ///
    /// Returns `None` if the client's size class differs from the pool's,
    /// or if every lot is taken.
    pub fn allocate(&mut self, client: &Client) -> Option<Ticket> {
        if client.size_class() != self.size_class {
            debug!(
                size_class = %self.size_class,
                client = %client.id(),
                client_size = %client.size_class(),
                "allocation refused: size class mismatch"
            );
            return None;
        }
        if self.is_full() {
            debug!(
                size_class = %self.size_class,
                client = %client.id(),
                "allocation refused: pool full"
            );
            return None;
        }

        let Some(lot) = self.lots.iter_mut().find(|lot| lot.is_available()) else {
            warn!(
                size_class = %self.size_class,
                occupied = self.occupied,
                capacity = %self.capacity,
                "occupied count below capacity but no lot is available"
            );
            return None;
        };
        if !lot.reserve(client) {
            return None;
        }
        let lot_id = lot.id();
        self.occupied += 1;

        debug!(
            size_class = %self.size_class,
            lot = %lot_id,
            client = %client.id(),
            occupied = self.occupied,
            "lot allocated"
        );
        Some(Ticket::new(lot_id, client.id().clone(), self.size_class))
    }

    /// Free the lot named by `ticket` and redeem the ticket.
    ///
    /// Returns `false`, changing nothing, if the pool is empty, the ticket
    /// was already redeemed, its lot index is out of range, or the lot
    /// refuses it.
    pub fn release(&mut self, ticket: &mut Ticket) -> bool {
        if self.occupied == 0 {
            debug!(
                size_class = %self.size_class,
                ticket = %ticket.id(),
                "release refused: pool empty"
            );
            return false;
        }
        if !ticket.is_valid() {
            debug!(
                size_class = %self.size_class,
                ticket = %ticket.id(),
                "release refused: ticket already redeemed"
            );
            return false;
        }
        let Some(lot) = self.lots.get_mut(ticket.lot_id().index()) else {
            debug!(
                size_class = %self.size_class,
                lot = %ticket.lot_id(),
                "release refused: lot out of range"
            );
            return false;
        };
        if let Err(reason) = lot.check_release(ticket) {
            debug!(size_class = %self.size_class, lot = %lot.id(), %reason, "release refused");
            return false;
        }
        if !lot.release(ticket) {
            return false;
        }
        self.occupied = self.occupied.saturating_sub(1);

        debug!(
            size_class = %self.size_class,
            lot = %ticket.lot_id(),
            client = %ticket.client_id(),
            occupied = self.occupied,
            "lot released"
        );
        true
    }

    /// The pool's size class.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Total number of lots.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of occupied lots.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Number of free lots.
    pub fn available(&self) -> usize {
        self.capacity().saturating_sub(self.occupied)
    }

    /// Whether every lot is taken.
    pub fn is_full(&self) -> bool {
        self.occupied >= self.capacity()
    }

    /// All lots, in index order.
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    /// The lot with the given index, if it exists.
    pub fn lot(&self, id: LotId) -> Option<&Lot> {
        self.lots.get(id.index())
    }

    /// Snapshot of the pool's occupancy.
    pub fn report(&self) -> OccupancyReport {
        OccupancyReport {
            size_class: self.size_class,
            capacity: self.capacity(),
            occupied: self.occupied,
            available: self.available(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

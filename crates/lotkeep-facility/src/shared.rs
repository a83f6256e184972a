//! # Shared Lot Manager
//!
//! A cloneable, thread-safe handle over the three pools. Each pool sits
//! behind its own `parking_lot::Mutex`, so a bike leaving never waits on a
//! truck arriving. Pools of different size classes share no state.
//!
//! Every call takes exactly one lock and releases it before returning.
//! `parking_lot` mutexes do not poison, so a panicking caller cannot
//! wedge a pool for everyone else.

use std::sync::Arc;

use parking_lot::Mutex;

use lotkeep_core::{Client, ClientId, SizeClass, SIZE_CLASS_COUNT};
use lotkeep_state::Ticket;

use crate::error::FacilityError;
use crate::manager::{FacilityCapacities, LotManager};
use crate::report::OccupancyReport;
use crate::tracker::LotTracker;

/// Thread-safe dispatcher with one lock per size class.
#[derive(Debug, Clone)]
pub struct SharedLotManager {
    trackers: Arc<[Mutex<LotTracker>; SIZE_CLASS_COUNT]>,
}

impl SharedLotManager {
    /// Create a shared facility from three signed lot counts.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::Capacity`] if any count is negative or
    /// exceeds [`lotkeep_core::MAX_LOTS`].
    pub fn new(small: i64, medium: i64, large: i64) -> Result<Self, FacilityError> {
        Ok(LotManager::new(small, medium, large)?.into())
    }

    /// Create a shared facility from validated capacities.
    pub fn from_capacities(capacities: FacilityCapacities) -> Self {
        LotManager::from_capacities(capacities).into()
    }

    /// Park `client` in a lot of its size class.
    pub fn park(&self, client: &Client) -> Option<Ticket> {
        self.with_tracker(client.size_class(), |tracker| tracker.allocate(client))
    }

    /// Park a client given by raw identity and size class.
    pub fn allocate(&self, client_id: &str, size_class: SizeClass) -> Option<Ticket> {
        let id = ClientId::new(client_id).ok()?;
        self.park(&Client::new(id, size_class))
    }

    /// Present `ticket` to the pool of its size class.
    pub fn unpark(&self, ticket: &mut Ticket) -> bool {
        self.with_tracker(ticket.size_class(), |tracker| tracker.release(ticket))
    }

    /// Occupancy of one pool.
    pub fn report(&self, size_class: SizeClass) -> OccupancyReport {
        self.with_tracker(size_class, |tracker| tracker.report())
    }

    /// Occupancy of every pool, small to large.
    ///
    /// Each pool is read under its own lock, so the reports are not one
    /// atomic snapshot of the whole facility.
    pub fn reports(&self) -> Vec<OccupancyReport> {
        SizeClass::all().iter().map(|size| self.report(*size)).collect()
    }

    fn with_tracker<R>(&self, size_class: SizeClass, f: impl FnOnce(&mut LotTracker) -> R) -> R {
        let mut guard = self.trackers[size_class.ordinal()].lock();
        f(&mut *guard)
    }
}

impl From<LotManager> for SharedLotManager {
    fn from(manager: LotManager) -> Self {
        Self {
            trackers: Arc::new(manager.into_trackers().map(Mutex::new)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotkeep_core::VehicleKind;

    #[test]
    fn test_clones_share_pools() {
        let a = SharedLotManager::new(1, 1, 1).unwrap();
        let b = a.clone();
        let mut ticket = a.allocate("bike", SizeClass::Small).unwrap();
        assert_eq!(b.report(SizeClass::Small).occupied, 1);
        assert!(b.allocate("bike-2", SizeClass::Small).is_none());
        assert!(b.unpark(&mut ticket));
        assert_eq!(a.report(SizeClass::Small).occupied, 0);
    }

    #[test]
    fn test_from_manager_keeps_occupancy() {
        let mut manager = LotManager::new(0, 2, 0).unwrap();
        let car = Client::vehicle(VehicleKind::Car, "c1").unwrap();
        let mut ticket = manager.park(&car).unwrap();
        let shared = SharedLotManager::from(manager);
        assert_eq!(shared.report(SizeClass::Medium).occupied, 1);
        assert!(shared.unpark(&mut ticket));
        assert!(!shared.unpark(&mut ticket));
    }

    #[test]
    fn test_blank_identity_refused() {
        let shared = SharedLotManager::new(1, 1, 1).unwrap();
        assert!(shared.allocate("\t", SizeClass::Medium).is_none());
        assert!(shared.reports().iter().all(|r| r.occupied == 0));
    }
}

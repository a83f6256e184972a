//! # Lot Manager — Size-Class Dispatcher
//!
//! Holds exactly one [`LotTracker`] per [`SizeClass`], built once from the
//! three capacities and never reassigned. Parking routes on the client's
//! size class, unparking on the ticket's; the trackers do the rest.

use serde::{Deserialize, Serialize};
use tracing::debug;

use lotkeep_core::{Capacity, Client, ClientId, SizeClass, SIZE_CLASS_COUNT};
use lotkeep_state::Ticket;

use crate::error::FacilityError;
use crate::report::OccupancyReport;
use crate::tracker::LotTracker;

/// Lot counts for each size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacilityCapacities {
    /// Lots for small clients (bikes).
    pub small: Capacity,
    /// Lots for medium clients (cars).
    pub medium: Capacity,
    /// Lots for large clients (trucks).
    pub large: Capacity,
}

impl FacilityCapacities {
    /// Validate three signed lot counts.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::Capacity`] naming the first size class
    /// whose count is negative or exceeds [`lotkeep_core::MAX_LOTS`].
    pub fn new(small: i64, medium: i64, large: i64) -> Result<Self, FacilityError> {
        let check = |count: i64, size_class: SizeClass| {
            Capacity::new(count).map_err(|e| FacilityError::capacity(size_class, e))
        };
        Ok(Self {
            small: check(small, SizeClass::Small)?,
            medium: check(medium, SizeClass::Medium)?,
            large: check(large, SizeClass::Large)?,
        })
    }

    /// The capacity configured for `size_class`.
    pub fn get(&self, size_class: SizeClass) -> Capacity {
        match size_class {
            SizeClass::Small => self.small,
            SizeClass::Medium => self.medium,
            SizeClass::Large => self.large,
        }
    }
}

/// Routes parking requests and tickets to the pool of the matching size class.
#[derive(Debug, Clone)]
pub struct LotManager {
    trackers: [LotTracker; SIZE_CLASS_COUNT],
}

impl LotManager {
    /// Create a facility from three signed lot counts.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::Capacity`] if any count is negative or
    /// exceeds [`lotkeep_core::MAX_LOTS`].
    pub fn new(small: i64, medium: i64, large: i64) -> Result<Self, FacilityError> {
        let capacities = FacilityCapacities::new(small, medium, large)?;
        Ok(Self::from_capacities(capacities))
    }

    /// Create a facility from validated capacities.
    pub fn from_capacities(capacities: FacilityCapacities) -> Self {
        Self {
            trackers: [
                LotTracker::new(capacities.small, SizeClass::Small),
                LotTracker::new(capacities.medium, SizeClass::Medium),
                LotTracker::new(capacities.large, SizeClass::Large),
            ],
        }
    }

    /// Park `client` in a lot of its size class.
    pub fn park(&mut self, client: &Client) -> Option<Ticket> {
        self.tracker_mut(client.size_class()).allocate(client)
    }

    /// Park a client given by raw identity and size class.
    ///
    /// Returns `None` if the identity is blank or no lot is free.
    pub fn allocate(&mut self, client_id: &str, size_class: SizeClass) -> Option<Ticket> {
        match ClientId::new(client_id) {
            Ok(id) => self.park(&Client::new(id, size_class)),
            Err(e) => {
                debug!(%size_class, error = %e, "allocation refused: invalid client identity");
                None
            }
        }
    }

    /// Present `ticket` to the pool of its size class.
    pub fn unpark(&mut self, ticket: &mut Ticket) -> bool {
        self.tracker_mut(ticket.size_class()).release(ticket)
    }

    /// Alias of [`LotManager::unpark`].
    pub fn release(&mut self, ticket: &mut Ticket) -> bool {
        self.unpark(ticket)
    }

    /// The pool for `size_class`.
    pub fn tracker(&self, size_class: SizeClass) -> &LotTracker {
        &self.trackers[size_class.ordinal()]
    }

    fn tracker_mut(&mut self, size_class: SizeClass) -> &mut LotTracker {
        &mut self.trackers[size_class.ordinal()]
    }

    /// Occupancy of every pool, small to large.
    pub fn reports(&self) -> Vec<OccupancyReport> {
        self.trackers.iter().map(LotTracker::report).collect()
    }

    /// Occupied lots across all pools.
    pub fn total_occupied(&self) -> usize {
        self.trackers.iter().map(LotTracker::occupied).sum()
    }

    /// Hand the pools over, small to large.
    pub(crate) fn into_trackers(self) -> [LotTracker; SIZE_CLASS_COUNT] {
        self.trackers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotkeep_core::{CoreError, VehicleKind};

    fn manager(small: i64, medium: i64, large: i64) -> LotManager {
        LotManager::new(small, medium, large).unwrap()
    }

    #[test]
    fn test_each_pool_has_its_size_class() {
        let m = manager(1, 2, 3);
        for size in SizeClass::all() {
            assert_eq!(m.tracker(*size).size_class(), *size);
        }
        assert_eq!(m.tracker(SizeClass::Small).capacity(), 1);
        assert_eq!(m.tracker(SizeClass::Medium).capacity(), 2);
        assert_eq!(m.tracker(SizeClass::Large).capacity(), 3);
    }

    #[test]
    fn test_negative_capacity_names_class() {
        let err = LotManager::new(1, -1, 1).unwrap_err();
        assert!(matches!(
            err,
            FacilityError::Capacity { size_class: SizeClass::Medium, .. }
        ));
        assert!(LotManager::new(-5, 0, 0).is_err());
        assert!(LotManager::new(0, 0, -5).is_err());
    }

    #[test]
    fn test_oversized_capacity_is_an_error() {
        let err = LotManager::new(1 << 44, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            FacilityError::Capacity {
                size_class: SizeClass::Small,
                source: CoreError::CapacityOverflow(_),
            }
        ));
        assert!(LotManager::new(0, 0, i64::MAX).is_err());
    }

    #[test]
    fn test_park_routes_by_vehicle_kind() {
        let mut m = manager(10, 10, 10);
        for i in 0..10 {
            let car = Client::vehicle(VehicleKind::Car, i.to_string()).unwrap();
            let ticket = m.park(&car).unwrap();
            assert_eq!(ticket.client_id(), car.id());
            assert_eq!(ticket.size_class(), SizeClass::Medium);
        }
        assert_eq!(m.tracker(SizeClass::Medium).occupied(), 10);
        assert_eq!(m.tracker(SizeClass::Small).occupied(), 0);

        let extra = Client::vehicle(VehicleKind::Car, "11").unwrap();
        assert!(m.park(&extra).is_none());

        // Other classes are unaffected by a full medium pool.
        let bike = Client::vehicle(VehicleKind::Bike, "11").unwrap();
        assert_eq!(m.park(&bike).unwrap().size_class(), SizeClass::Small);
    }

    #[test]
    fn test_unpark_routes_by_ticket_size() {
        let mut m = manager(1, 1, 1);
        let mut tickets: Vec<Ticket> = VehicleKind::all()
            .iter()
            .map(|kind| m.park(&Client::vehicle(*kind, "v").unwrap()).unwrap())
            .collect();
        assert_eq!(m.total_occupied(), 3);
        for ticket in &mut tickets {
            let size = ticket.size_class();
            assert!(m.unpark(ticket));
            assert_eq!(m.tracker(size).occupied(), 0);
        }
        assert_eq!(m.total_occupied(), 0);
    }

    #[test]
    fn test_allocate_rejects_blank_identity() {
        let mut m = manager(1, 1, 1);
        assert!(m.allocate("", SizeClass::Small).is_none());
        assert!(m.allocate("  ", SizeClass::Large).is_none());
        assert_eq!(m.total_occupied(), 0);
    }

    #[test]
    fn test_allocate_and_release_boundary() {
        let mut m = manager(0, 1, 0);
        let mut ticket = m.allocate("car-1", SizeClass::Medium).unwrap();
        assert!(m.allocate("car-2", SizeClass::Medium).is_none());
        assert!(m.allocate("bike-1", SizeClass::Small).is_none());
        assert!(m.release(&mut ticket));
        assert!(!m.release(&mut ticket));
    }

    #[test]
    fn test_reports_in_canonical_order() {
        let mut m = manager(2, 3, 4);
        m.allocate("t", SizeClass::Large).unwrap();
        let reports = m.reports();
        let sizes: Vec<SizeClass> = reports.iter().map(|r| r.size_class).collect();
        assert_eq!(sizes, SizeClass::all().to_vec());
        assert_eq!(reports[2].occupied, 1);
        assert_eq!(reports[2].available, 3);
    }

    #[test]
    fn test_capacities_deserialize_validates() {
        let caps: FacilityCapacities =
            serde_json::from_str(r#"{"small":1,"medium":2,"large":3}"#).unwrap();
        assert_eq!(caps.get(SizeClass::Medium).get(), 2);
        assert!(serde_json::from_str::<FacilityCapacities>(
            r#"{"small":-1,"medium":2,"large":3}"#
        )
        .is_err());
    }
}

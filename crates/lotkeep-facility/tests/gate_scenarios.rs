//! # Gate Scenarios
//!
//! End-to-end sequences through the public API: a vehicle arrives, gets a
//! ticket, leaves with it. These pin down the lot numbers and counts a
//! facility operator would see.

use lotkeep_core::{Capacity, LotId};
use lotkeep_facility::{Client, LotManager, LotTracker, SizeClass, Ticket, VehicleKind};

fn small(id: &str) -> Client {
    Client::parse(id, SizeClass::Small).unwrap()
}

#[test]
fn two_lot_pool_fills_and_refuses_spent_ticket() {
    let mut pool = LotTracker::new(Capacity::new(2).unwrap(), SizeClass::Small);

    let mut car1 = pool.allocate(&small("car1")).unwrap();
    assert_eq!(car1.lot_id(), LotId(0));
    let car2 = pool.allocate(&small("car2")).unwrap();
    assert_eq!(car2.lot_id(), LotId(1));

    assert!(pool.allocate(&small("car3")).is_none(), "pool should be full");
    assert_eq!(pool.occupied(), 2);

    assert!(pool.release(&mut car1));
    assert_eq!(pool.occupied(), 1);

    assert!(!pool.release(&mut car1), "spent ticket must be refused");
    assert_eq!(pool.occupied(), 1);
}

#[test]
fn reparked_client_cannot_reuse_old_ticket() {
    let mut pool = LotTracker::new(Capacity::new(1).unwrap(), SizeClass::Medium);
    let car = Client::vehicle(VehicleKind::Car, "KA-01-1234").unwrap();

    let mut first = pool.allocate(&car).unwrap();
    assert!(pool.release(&mut first));

    let mut second = pool.allocate(&car).unwrap();
    assert_eq!(second.lot_id(), first.lot_id());

    assert!(!pool.release(&mut first));
    assert_eq!(pool.occupied(), 1);
    assert!(pool.release(&mut second));
    assert_eq!(pool.occupied(), 0);
}

#[test]
fn ticket_for_previous_occupant_is_refused() {
    let mut pool = LotTracker::new(Capacity::new(1).unwrap(), SizeClass::Small);
    let mut a = pool.allocate(&small("A")).unwrap();
    assert!(pool.release(&mut a));
    let _b = pool.allocate(&small("B")).unwrap();

    // A hand-made ticket naming A for lot 0, now held by B.
    let mut stale = Ticket::issue(LotId(0), "A", SizeClass::Small).unwrap();
    assert!(!pool.release(&mut stale));
    assert!(stale.is_valid());
    assert_eq!(pool.occupied(), 1);
}

#[test]
fn empty_pool_refuses_every_ticket() {
    let mut pool = LotTracker::new(Capacity::new(3).unwrap(), SizeClass::Large);
    for lot in 0..4 {
        let mut ticket = Ticket::issue(LotId(lot), "truck", SizeClass::Large).unwrap();
        assert!(!pool.release(&mut ticket));
        assert_eq!(pool.occupied(), 0);
    }
}

#[test]
fn facility_keeps_size_classes_apart() {
    let mut facility = LotManager::new(1, 1, 1).unwrap();

    let mut bike = facility.allocate("b", SizeClass::Small).unwrap();
    let mut car = facility.allocate("c", SizeClass::Medium).unwrap();
    let mut truck = facility.allocate("t", SizeClass::Large).unwrap();

    for ticket in [&bike, &car, &truck] {
        assert_eq!(ticket.lot_id(), LotId(0));
    }
    for size in SizeClass::all() {
        assert!(facility.tracker(*size).is_full());
        assert!(facility.allocate("late", *size).is_none());
    }

    assert!(facility.unpark(&mut car));
    assert!(facility.tracker(SizeClass::Medium).available() == 1);
    assert!(facility.tracker(SizeClass::Small).is_full());
    assert!(facility.unpark(&mut bike));
    assert!(facility.unpark(&mut truck));
    assert_eq!(facility.total_occupied(), 0);
}

#[test]
fn zero_capacity_class_is_always_full() {
    let mut facility = LotManager::new(0, 5, 5).unwrap();
    let bike = Client::vehicle(VehicleKind::Bike, "b1").unwrap();
    assert!(facility.park(&bike).is_none());
    assert!(facility.tracker(SizeClass::Small).is_full());
}

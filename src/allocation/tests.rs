//! Test suite for table allocation.

use super::*;
use crate::registry::RegistryError;
use chrono::{Duration, NaiveDate, NaiveDateTime};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 5, 17).unwrap()
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    day().and_hms_opt(hour, minute, 0).unwrap()
}

fn hours() -> OperatingHours {
    OperatingHours::parse("09:00", "22:00").unwrap()
}

/// Request submitted at 08:00 on the test day.
fn request(party_size: i64, from: NaiveDateTime, till: NaiveDateTime) -> ReservationRequest {
    ReservationRequest::new("guest", party_size, "555-0100", at(8, 0), from, till)
}

fn seat(
    registry: &mut Registry,
    party_size: i64,
    from: (u32, u32),
    till: (u32, u32),
) -> Result<Allocation, AllocationError> {
    let req = request(party_size, at(from.0, from.1), at(till.0, till.1));
    allocate(registry, &req, &hours())
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn test_empty_span_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 2, (12, 0), (12, 0)),
            Err(AllocationError::EndNotAfterStart)
        );
        assert_eq!(registry.reservation_count(), 0);
    }

    #[test]
    fn test_reversed_span_checked_before_party_size() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 0, (14, 0), (12, 0)),
            Err(AllocationError::EndNotAfterStart)
        );
    }

    #[test]
    fn test_start_before_submission_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        let req = ReservationRequest::new("guest", 2, "", at(13, 0), at(12, 0), at(14, 0));
        assert_eq!(
            allocate(&mut registry, &req, &hours()),
            Err(AllocationError::StartBeforeSubmission)
        );
    }

    #[test]
    fn test_start_at_submission_accepted() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        let req = ReservationRequest::new("guest", 2, "", at(12, 0), at(12, 0), at(14, 0));
        assert!(allocate(&mut registry, &req, &hours()).is_ok());
    }

    #[test]
    fn test_start_before_opening_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 2, (8, 30), (10, 0)),
            Err(AllocationError::OutsideOperatingHours)
        );
        assert_eq!(registry.reservation_count(), 0);
    }

    #[test]
    fn test_start_on_opening_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 2, (9, 0), (10, 0)),
            Err(AllocationError::OutsideOperatingHours)
        );
    }

    #[test]
    fn test_start_after_closing_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 2, (22, 15), (23, 0)),
            Err(AllocationError::OutsideOperatingHours)
        );
    }

    #[test]
    fn end_after_closing_is_not_checked() {
        // Only the start is compared against opening hours.
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert!(seat(&mut registry, 2, (21, 0), (23, 30)).is_ok());
    }

    #[test]
    fn test_hours_on_request_day_skip_the_fallback() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        let same_day = OperatingHours::from_instants(at(9, 0), at(22, 0));

        let inside = request(2, at(10, 0), at(12, 0));
        assert!(allocate(&mut registry, &inside, &same_day).is_ok());

        let early = request(2, at(8, 30), at(10, 0));
        assert_eq!(
            allocate(&mut registry, &early, &same_day),
            Err(AllocationError::OutsideOperatingHours)
        );
    }

    #[test]
    fn test_wall_clock_fallback_on_another_day() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        let same_day = OperatingHours::from_instants(at(9, 0), at(22, 0));
        let next_day = at(10, 0) + Duration::days(1);

        let req = request(2, next_day, next_day + Duration::hours(2));
        assert!(allocate(&mut registry, &req, &same_day).is_ok());
    }

    #[test]
    fn test_zero_party_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 0, (12, 0), (14, 0)),
            Err(AllocationError::InvalidPartySize(0))
        );
        assert_eq!(registry.reservation_count(), 0);
    }

    #[test]
    fn test_negative_party_rejected() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, -3, (12, 0), (14, 0)),
            Err(AllocationError::InvalidPartySize(-3))
        );
    }

    #[test]
    fn test_hours_checked_before_party_size() {
        let mut registry = Registry::with_uniform(3, 4).unwrap();
        assert_eq!(
            seat(&mut registry, 0, (7, 0), (8, 0)),
            Err(AllocationError::StartBeforeSubmission)
        );
        assert_eq!(
            seat(&mut registry, 0, (8, 30), (10, 0)),
            Err(AllocationError::OutsideOperatingHours)
        );
    }
}

#[cfg(test)]
mod greedy {
    use super::*;

    #[test]
    fn test_two_smallest_tables_for_four() {
        let mut registry = Registry::from_capacities([2, 3, 5]).unwrap();
        let allocation = seat(&mut registry, 4, (19, 0), (21, 0)).unwrap();

        assert_eq!(allocation.tables(), &[0, 1]);
        assert_eq!(allocation.seated(), 5);
        assert_eq!(registry.reservation_count(), 2);
        assert!(registry.reservations_for(2).is_empty());
    }

    #[test]
    fn test_later_span_reuses_booked_tables() {
        let mut registry = Registry::from_capacities([2, 3, 5]).unwrap();
        seat(&mut registry, 4, (12, 0), (14, 0)).unwrap();

        let allocation = seat(&mut registry, 6, (18, 0), (20, 0)).unwrap();
        assert_eq!(allocation.tables(), &[0, 1, 2]);
        assert_eq!(allocation.seated(), 10);
        assert_eq!(registry.reservations_for(0).len(), 2);
        assert_eq!(registry.reservations_for(1).len(), 2);
        assert_eq!(registry.reservations_for(2).len(), 1);
    }

    #[test]
    fn test_smallest_capacity_first_regardless_of_id() {
        let mut registry = Registry::from_capacities([5, 2, 3]).unwrap();
        let allocation = seat(&mut registry, 4, (12, 0), (14, 0)).unwrap();
        assert_eq!(allocation.tables(), &[1, 2]);
    }

    #[test]
    fn test_equal_capacities_taken_in_id_order() {
        let mut registry = Registry::from_capacities([4, 2, 4, 2]).unwrap();
        let allocation = seat(&mut registry, 5, (12, 0), (14, 0)).unwrap();
        assert_eq!(allocation.tables(), &[1, 3, 0]);
        assert_eq!(allocation.seated(), 8);
    }

    #[test]
    fn test_booked_table_skipped() {
        let mut registry = Registry::from_capacities([2, 3, 5]).unwrap();
        assert_eq!(seat(&mut registry, 2, (19, 0), (21, 0)).unwrap().tables(), &[0]);

        let allocation = seat(&mut registry, 2, (20, 0), (22, 0)).unwrap();
        assert_eq!(allocation.tables(), &[1]);
    }

    #[test]
    fn test_back_to_back_bookings_share_a_table() {
        let mut registry = Registry::from_capacities([4]).unwrap();
        seat(&mut registry, 4, (12, 0), (14, 0)).unwrap();
        let allocation = seat(&mut registry, 4, (14, 0), (16, 0)).unwrap();
        assert_eq!(allocation.tables(), &[0]);
    }

    #[test]
    fn test_identical_span_cannot_double_book() {
        let mut registry = Registry::from_capacities([4]).unwrap();
        seat(&mut registry, 4, (19, 0), (21, 0)).unwrap();
        let before = registry.clone();

        assert_eq!(
            seat(&mut registry, 4, (19, 0), (21, 0)),
            Err(AllocationError::CapacityUnavailable { party_size: 4 })
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn test_party_larger_than_venue() {
        let mut registry = Registry::from_capacities([2, 3, 5]).unwrap();
        assert_eq!(
            seat(&mut registry, 11, (12, 0), (14, 0)),
            Err(AllocationError::CapacityUnavailable { party_size: 11 })
        );
        assert_eq!(registry.reservation_count(), 0);
    }

    #[test]
    fn test_empty_registry_has_no_capacity() {
        let mut registry = Registry::new();
        assert_eq!(
            seat(&mut registry, 1, (12, 0), (14, 0)),
            Err(AllocationError::CapacityUnavailable { party_size: 1 })
        );
    }

    #[test]
    fn test_records_share_reservation_id() {
        let mut registry = Registry::from_capacities([2, 3, 5]).unwrap();
        let allocation = seat(&mut registry, 4, (19, 0), (21, 0)).unwrap();

        for &id in allocation.tables() {
            let records = registry.reservations_for(id);
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].reservation_id(), allocation.reservation_id());
            assert_eq!(records[0].reserved_at(), at(8, 0));
            assert_eq!(records[0].reserved_from(), at(19, 0));
            assert_eq!(records[0].reserved_till(), at(21, 0));
        }
    }

    #[test]
    fn test_each_allocation_gets_a_fresh_id() {
        let mut registry = Registry::with_uniform(4, 4).unwrap();
        let a = seat(&mut registry, 2, (12, 0), (13, 0)).unwrap();
        let b = seat(&mut registry, 2, (12, 0), (13, 0)).unwrap();
        assert_ne!(a.reservation_id(), b.reservation_id());
    }

    #[test]
    fn test_custom_allocator_through_trait() {
        let mut registry = Registry::with_uniform(2, 3).unwrap();
        let allocator: &dyn Allocator = &GreedyAllocator;
        let req = request(3, at(12, 0), at(13, 0));
        let allocation = allocator.allocate(&mut registry, &req, &hours()).unwrap();
        assert_eq!(allocation.tables(), &[0]);
    }

    #[test]
    fn test_commit_failure_propagates() {
        // Registry errors cannot come out of the walk itself, but the variant
        // must still convert.
        let e: AllocationError = RegistryError::UnknownTable(9).into();
        assert!(matches!(e, AllocationError::Registry(RegistryError::UnknownTable(9))));
    }
}

/// Cases where the booking rules let a table be held twice.
#[cfg(test)]
mod known_gaps {
    use super::*;

    #[test]
    fn enclosing_span_double_books() {
        let mut registry = Registry::from_capacities([4]).unwrap();
        seat(&mut registry, 4, (12, 0), (14, 0)).unwrap();

        let allocation = seat(&mut registry, 4, (11, 0), (15, 0)).unwrap();
        assert_eq!(allocation.tables(), &[0]);
        assert_eq!(registry.reservations_for(0).len(), 2);
    }

    #[test]
    fn table_free_against_any_record_is_eligible() {
        let mut registry = Registry::from_capacities([4]).unwrap();
        seat(&mut registry, 4, (12, 0), (13, 0)).unwrap();
        seat(&mut registry, 4, (18, 0), (19, 0)).unwrap();

        // Clashes with the first record but not with the second.
        let allocation = seat(&mut registry, 4, (12, 0), (13, 0)).unwrap();
        assert_eq!(allocation.tables(), &[0]);
        assert_eq!(registry.reservations_for(0).len(), 3);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn random_registry(rng: &mut StdRng) -> Registry {
        let count = rng.gen_range(1..=8);
        let capacities: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=6)).collect();
        Registry::from_capacities(capacities).unwrap()
    }

    fn random_request(rng: &mut StdRng) -> ReservationRequest {
        let start = at(rng.gen_range(7..=22), rng.gen_range(0..4) * 15);
        let minutes = rng.gen_range(-60..=180);
        let end = start + Duration::minutes(minutes);
        request(rng.gen_range(-2..=14), start, end)
    }

    #[test]
    fn allocation_invariants_hold() {
        let mut rng = StdRng::seed_from_u64(0x5EA7);

        for _ in 0..50 {
            let mut registry = random_registry(&mut rng);

            for _ in 0..40 {
                let req = random_request(&mut rng);
                let before = registry.clone();

                match allocate(&mut registry, &req, &hours()) {
                    Ok(allocation) => {
                        let ids = allocation.tables();
                        let unique: HashSet<_> = ids.iter().collect();
                        assert_eq!(unique.len(), ids.len());

                        let seated: u64 = ids
                            .iter()
                            .map(|&id| u64::from(registry.table(id).unwrap().capacity()))
                            .sum();
                        assert_eq!(seated, allocation.seated());
                        assert!(seated >= req.party_size as u64);

                        for table in registry.tables() {
                            let old = before.reservations_for(table.id());
                            let new = registry.reservations_for(table.id());
                            if ids.contains(&table.id()) {
                                assert_eq!(new.len(), old.len() + 1);
                                assert_eq!(&new[..old.len()], old);
                                let last = &new[old.len()];
                                assert_eq!(last.reservation_id(), allocation.reservation_id());
                                assert_eq!(last.reserved_from(), req.start);
                                assert_eq!(last.reserved_till(), req.end);
                            } else {
                                assert_eq!(new, old);
                            }
                        }
                    }
                    Err(e) => {
                        assert_eq!(registry, before);
                        if req.end <= req.start {
                            assert_eq!(e, AllocationError::EndNotAfterStart);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn non_positive_party_never_seated() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut registry = Registry::with_uniform(10, 5).unwrap();

        for _ in 0..200 {
            let start = at(rng.gen_range(10..=20), 0);
            let req = request(rng.gen_range(-5..=0), start, start + Duration::hours(1));
            assert_eq!(
                allocate(&mut registry, &req, &hours()),
                Err(AllocationError::InvalidPartySize(req.party_size))
            );
        }
        assert_eq!(registry.reservation_count(), 0);
    }
}

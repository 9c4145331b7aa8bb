//! Unit tests for hs-reception.

use std::collections::HashMap;

use hs_core::{HospitalConfig, OperatingRoomId, PatientId, Resource, RoomId, SeatId};

use crate::{
    Assignment, Candidate, Duty, Grant, LinearScan, MinHeap, Origin, ReceptionError,
    ReceptionScheduler, ResourcePool, SelectionPolicy, Ticket,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f64 = 1.0;

fn config(seats: u16, rooms: u16) -> HospitalConfig {
    HospitalConfig {
        waiting_seats: seats,
        consultation_rooms: rooms,
        ..HospitalConfig::default()
    }
}

fn p(n: u32) -> PatientId {
    PatientId(n)
}

/// Patience table standing in for the hospital's patient map.
struct Ward(HashMap<PatientId, f64>);

impl Ward {
    fn new(entries: &[(u32, f64)]) -> Self {
        Ward(entries.iter().map(|&(id, pat)| (PatientId(id), pat)).collect())
    }

    fn lookup(&self) -> impl Fn(PatientId) -> Option<f64> + '_ {
        move |id| self.0.get(&id).copied()
    }
}

fn scheduler_with(seats: u16, rooms: u16, queue: &[u32]) -> ReceptionScheduler {
    let mut s = ReceptionScheduler::from_config(&config(seats, rooms));
    for &id in queue {
        s.enqueue(p(id)).unwrap();
    }
    s
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool_tests {
    use super::*;

    #[test]
    fn acquire_hands_out_lowest_free_handle() {
        let mut pool = ResourcePool::new([RoomId(2), RoomId(0), RoomId(1)]);
        assert_eq!(pool.acquire(p(7)), Some(RoomId(0)));
        assert_eq!(pool.acquire(p(8)), Some(RoomId(1)));
        assert_eq!(pool.holder(RoomId(0)), Some(p(7)));
        assert_eq!(pool.free_count(), 1);
        assert_eq!(pool.held_count(), 2);
        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    fn exhausted_pool_returns_none() {
        let mut pool = ResourcePool::new([SeatId(0)]);
        assert!(pool.acquire(p(0)).is_some());
        assert_eq!(pool.acquire(p(1)), None);
        assert!(!pool.has_free());
    }

    #[test]
    fn claim_rejects_held_and_unknown_handles() {
        let mut pool = ResourcePool::new([OperatingRoomId(0)]);
        pool.claim(OperatingRoomId(0), p(1)).unwrap();
        assert_eq!(
            pool.claim(OperatingRoomId(0), p(2)),
            Err(ReceptionError::AlreadyHeld {
                resource: Resource::OperatingRoom(OperatingRoomId(0)),
                holder:   p(1),
            })
        );
        assert_eq!(
            pool.claim(OperatingRoomId(9), p(2)),
            Err(ReceptionError::UnknownResource(Resource::OperatingRoom(OperatingRoomId(9))))
        );
    }

    #[test]
    fn release_returns_holder_and_frees_handle() {
        let mut pool = ResourcePool::new([RoomId(0)]);
        pool.acquire(p(4));
        assert_eq!(pool.release(RoomId(0)), Ok(p(4)));
        assert!(pool.is_free(RoomId(0)));
        assert_eq!(pool.release(RoomId(0)), Err(ReceptionError::NotHeld(Resource::Room(RoomId(0)))));
        assert_eq!(
            pool.release(RoomId(5)),
            Err(ReceptionError::UnknownResource(Resource::Room(RoomId(5))))
        );
    }

    #[test]
    fn holdings_iterate_in_handle_order() {
        let mut pool = ResourcePool::new((0..3).map(SeatId));
        pool.claim(SeatId(2), p(0)).unwrap();
        pool.claim(SeatId(0), p(1)).unwrap();
        let held: Vec<_> = pool.holdings().collect();
        assert_eq!(held, vec![(SeatId(0), p(1)), (SeatId(2), p(0))]);
        assert_eq!(pool.free_handles().collect::<Vec<_>>(), vec![SeatId(1)]);
    }
}

// ── Selection policies ────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;

    fn cand(id: u32, patience: f64, ticket: u64) -> Candidate {
        Candidate { patient: p(id), patience, ticket, origin: Origin::Desk }
    }

    #[test]
    fn lowest_patience_wins() {
        let cs = [cand(0, 40.0, 0), cand(1, 10.0, 1), cand(2, 25.0, 2)];
        assert_eq!(LinearScan.select(&cs).map(|c| c.patient), Some(p(1)));
        assert_eq!(MinHeap.select(&cs).map(|c| c.patient), Some(p(1)));
    }

    #[test]
    fn equal_patience_goes_to_earliest_ticket() {
        // Listed out of ticket order on purpose.
        let cs = [cand(5, 30.0, 9), cand(6, 30.0, 2), cand(7, 30.0, 4)];
        assert_eq!(LinearScan.select(&cs).map(|c| c.patient), Some(p(6)));
        assert_eq!(MinHeap.select(&cs).map(|c| c.patient), Some(p(6)));
    }

    #[test]
    fn empty_slice_selects_nothing() {
        assert_eq!(LinearScan.select(&[]), None);
        assert_eq!(MinHeap.select(&[]), None);
    }

    #[test]
    fn policies_agree_on_mixed_inputs() {
        let patience = [12.5, 3.0, 3.0, 99.0, 0.5, 0.5, 47.0, 12.5];
        for len in 1..=patience.len() {
            let cs: Vec<_> = patience[..len]
                .iter()
                .enumerate()
                .map(|(i, &pat)| cand(i as u32, pat, (len - i) as u64))
                .collect();
            assert_eq!(LinearScan.select(&cs), MinHeap.select(&cs), "len {len}");
        }
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use super::*;

    #[test]
    fn enqueue_assigns_increasing_tickets() {
        let mut s = scheduler_with(2, 1, &[]);
        assert_eq!(s.enqueue(p(3)).unwrap().number, 0);
        assert_eq!(s.enqueue(p(1)).unwrap().number, 1);
        assert_eq!(s.queued().collect::<Vec<_>>(), vec![p(3), p(1)]);
    }

    #[test]
    fn enqueue_twice_is_rejected() {
        let mut s = scheduler_with(2, 1, &[0]);
        assert_eq!(s.enqueue(p(0)), Err(ReceptionError::AlreadyRegistered(p(0))));
        assert_eq!(s.queue_len(), 1);
    }

    #[test]
    fn less_patient_is_served_first() {
        // Ticket order favours patient 0; patience favours patient 1.
        let mut s = scheduler_with(4, 1, &[0, 1]);
        let ward = Ward::new(&[(0, 40.0), (1, 10.0)]);

        let first = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(first, Assignment { patient: p(1), grant: Grant::Seat(SeatId(0)) });

        let second = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(second, Assignment { patient: p(1), grant: Grant::Room(RoomId(0)) });
        assert!(s.seats().is_free(SeatId(0)), "seat returned on promotion");

        // No room left: the other patient is only seated.
        let third = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(third, Assignment { patient: p(0), grant: Grant::Seat(SeatId(0)) });
        assert_eq!(s.tick(DT, ward.lookup()), None);
    }

    #[test]
    fn tie_goes_to_first_arrival() {
        let mut s = scheduler_with(0, 1, &[4, 2, 9]);
        let ward = Ward::new(&[(4, 50.0), (2, 50.0), (9, 50.0)]);
        let a = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(a.patient, p(4));
    }

    #[test]
    fn arrival_ticket_survives_seating() {
        // Patient 1 is seated before patient 2 arrives; with equal patience
        // the seated patient keeps its place for the next room.
        let mut s = scheduler_with(1, 1, &[0]);
        let ward = Ward::new(&[(0, 1.0), (1, 20.0), (2, 20.0)]);
        s.tick(DT, ward.lookup()); // 0 seated
        s.tick(DT, ward.lookup()); // 0 to the room
        s.enqueue(p(1)).unwrap();
        assert_eq!(s.tick(DT, ward.lookup()).unwrap().grant, Grant::Seat(SeatId(0)));
        s.enqueue(p(2)).unwrap();

        s.release(Resource::Room(RoomId(0))).unwrap();
        let next = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(next, Assignment { patient: p(1), grant: Grant::Room(RoomId(0)) });
    }

    #[test]
    fn desk_goes_straight_to_room_without_seats() {
        let mut s = scheduler_with(0, 1, &[0]);
        let ward = Ward::new(&[(0, 80.0)]);
        assert_eq!(
            s.tick(DT, ward.lookup()),
            Some(Assignment { patient: p(0), grant: Grant::Room(RoomId(0)) })
        );
        assert_eq!(s.queue_len(), 0);
        assert_eq!(s.waiting_room_len(), 0);
    }

    #[test]
    fn seated_patient_is_called_to_free_room() {
        let mut s = scheduler_with(1, 1, &[0]);
        let ward = Ward::new(&[(0, 5.0), (1, 60.0)]);
        s.tick(DT, ward.lookup());
        assert_eq!(s.seated().collect::<Vec<_>>(), vec![(p(0), SeatId(0))]);

        s.enqueue(p(1)).unwrap();
        let a = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(a, Assignment { patient: p(0), grant: Grant::Room(RoomId(0)) });
        assert_eq!(s.waiting_room_len(), 0);
        assert_eq!(s.queue_len(), 1);
    }

    #[test]
    fn less_patient_desk_patient_overtakes_the_waiting_room() {
        // A room and a seat are free; the newcomer at the desk is less
        // patient than the seated patient, so it is seated first and then
        // called to the room ahead of them.
        let mut s = scheduler_with(2, 1, &[0]);
        let ward = Ward::new(&[(0, 50.0), (1, 10.0)]);
        s.tick(DT, ward.lookup());
        assert_eq!(s.seated().collect::<Vec<_>>(), vec![(p(0), SeatId(0))]);

        s.enqueue(p(1)).unwrap();
        assert_eq!(
            s.tick(DT, ward.lookup()),
            Some(Assignment { patient: p(1), grant: Grant::Seat(SeatId(1)) })
        );
        assert!(s.rooms().is_free(RoomId(0)));
        assert_eq!(
            s.tick(DT, ward.lookup()),
            Some(Assignment { patient: p(1), grant: Grant::Room(RoomId(0)) })
        );
        assert_eq!(s.seated().collect::<Vec<_>>(), vec![(p(0), SeatId(0))]);
        assert_eq!(s.queue_len(), 0);
    }

    #[test]
    fn refused_seat_goes_back_and_patient_keeps_its_ticket() {
        let mut s = scheduler_with(1, 0, &[0, 1, 2]);
        let ward = Ward::new(&[(0, 50.0), (1, 10.0), (2, 50.0)]);
        let a = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(a, Assignment { patient: p(1), grant: Grant::Seat(SeatId(0)) });

        let ticket = s.refuse(a).unwrap();
        assert_eq!(ticket, Ticket { patient: p(1), number: 1 });
        assert!(s.seats().is_free(SeatId(0)));
        assert_eq!(s.waiting_room_len(), 0);
        assert_eq!(s.queued().collect::<Vec<_>>(), vec![p(0), p(1), p(2)]);
    }

    #[test]
    fn refused_room_goes_back_to_the_pool() {
        let mut s = scheduler_with(0, 1, &[3]);
        let ward = Ward::new(&[(3, 30.0)]);
        let a = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(a.grant, Grant::Room(RoomId(0)));
        s.refuse(a).unwrap();
        assert!(s.rooms().is_free(RoomId(0)));
        assert_eq!(s.queued().collect::<Vec<_>>(), vec![p(3)]);
    }

    #[test]
    fn only_the_latest_grant_can_be_refused() {
        let mut s = scheduler_with(2, 0, &[0, 1]);
        let ward = Ward::new(&[(0, 20.0), (1, 30.0)]);
        let first = s.tick(DT, ward.lookup()).unwrap();
        let second = s.tick(DT, ward.lookup()).unwrap();
        assert_eq!(
            s.refuse(first),
            Err(ReceptionError::NotIssued { patient: p(0), resource: Resource::Seat(SeatId(0)) })
        );
        assert!(s.refuse(second).is_ok());
        assert_eq!(s.tick(DT, ward.lookup()).map(|a| a.patient), Some(p(1)));
        assert_eq!(s.tick(DT, ward.lookup()), None);
        assert!(s.refuse(second).is_err(), "an idle pass clears the last grant");
    }

    #[test]
    fn full_hospital_applies_backpressure() {
        let mut s = scheduler_with(1, 1, &[0, 1, 2]);
        let ward = Ward::new(&[(0, 30.0), (1, 30.0), (2, 30.0)]);
        s.tick(DT, ward.lookup()); // 0 seated
        s.tick(DT, ward.lookup()); // 0 to the room
        s.tick(DT, ward.lookup()); // 1 seated
        for _ in 0..5 {
            assert_eq!(s.tick(DT, ward.lookup()), None);
        }
        assert_eq!(s.queued().collect::<Vec<_>>(), vec![p(2)]);
        assert_eq!(s.seated().collect::<Vec<_>>(), vec![(p(1), SeatId(0))]);
    }

    #[test]
    fn a_room_is_never_granted_twice() {
        let ids: Vec<u32> = (0..12).collect();
        let mut s = scheduler_with(3, 2, &ids);
        let ward = Ward::new(&ids.iter().map(|&i| (i, 100.0 - i as f64 * 3.0)).collect::<Vec<_>>());
        let mut holders: HashMap<RoomId, PatientId> = HashMap::new();
        let mut roomed = Vec::new();

        for tick in 0..200 {
            if let Some(Assignment { patient, grant: Grant::Room(room) }) = s.tick(DT, ward.lookup()) {
                assert!(holders.insert(room, patient).is_none(), "{room} double-booked");
                assert!(!roomed.contains(&patient), "{patient} roomed twice");
                roomed.push(patient);
            }
            // Consultations take a few ticks; then the room comes back.
            if tick % 4 == 3 {
                if let Some((&room, _)) = holders.iter().min_by_key(|(r, _)| **r) {
                    holders.remove(&room);
                    s.release(Resource::Room(room)).unwrap();
                }
            }
        }
        assert_eq!(roomed.len(), ids.len());
        // Least patient (highest id) got the first room.
        assert_eq!(roomed[0], p(11));
    }

    #[test]
    fn withdraw_from_waiting_room_returns_seat() {
        let mut s = scheduler_with(1, 0, &[0]);
        let ward = Ward::new(&[(0, 10.0)]);
        s.tick(DT, ward.lookup());
        assert_eq!(s.withdraw(p(0)), Ok(Some(SeatId(0))));
        assert!(s.seats().is_free(SeatId(0)));
        assert_eq!(s.withdraw(p(0)), Err(ReceptionError::NotRegistered(p(0))));
    }

    #[test]
    fn withdraw_from_desk_holds_no_seat() {
        let mut s = scheduler_with(1, 0, &[0, 1]);
        assert_eq!(s.withdraw(p(1)), Ok(None));
        assert_eq!(s.queued().collect::<Vec<_>>(), vec![p(0)]);
    }

    #[test]
    fn unknown_patients_are_dropped() {
        let mut s = scheduler_with(1, 0, &[0, 1]);
        let ward = Ward::new(&[(0, 10.0), (1, 90.0)]);
        s.tick(DT, ward.lookup()); // 0 seated
        let only_one = Ward::new(&[(1, 90.0)]);
        let a = s.tick(DT, only_one.lookup()).unwrap();
        assert_eq!(a, Assignment { patient: p(1), grant: Grant::Seat(SeatId(0)) });
        assert!(!s.is_registered(p(0)));
    }

    #[test]
    fn notify_walk_takes_receptionist_away() {
        let cfg = HospitalConfig {
            waiting_seats: 2,
            consultation_rooms: 2,
            notify_walk_secs: 3.0,
            ..HospitalConfig::default()
        };
        let mut s = ReceptionScheduler::from_config(&cfg);
        s.enqueue(p(0)).unwrap();
        s.enqueue(p(1)).unwrap();
        let ward = Ward::new(&[(0, 10.0), (1, 20.0)]);

        assert_eq!(s.tick(DT, ward.lookup()).unwrap().grant, Grant::Seat(SeatId(0)));
        assert_eq!(s.tick(DT, ward.lookup()).unwrap().grant, Grant::Room(RoomId(0)));
        assert_eq!(s.duty(), Duty::Away { remaining_secs: 3.0 });

        assert_eq!(s.tick(DT, ward.lookup()), None);
        assert_eq!(s.tick(DT, ward.lookup()), None);
        assert!(!s.is_at_post());
        // Back on the third step and straight to work.
        let a = s.tick(DT, ward.lookup()).unwrap();
        assert!(s.is_at_post());
        assert_eq!(a.patient, p(1));
    }

    #[test]
    fn operating_rooms_are_reserved_and_released() {
        let mut s = scheduler_with(0, 0, &[]);
        s.claim_operating_room(OperatingRoomId(0), p(3)).unwrap();
        assert!(matches!(
            s.claim_operating_room(OperatingRoomId(0), p(4)),
            Err(ReceptionError::AlreadyHeld { .. })
        ));
        assert_eq!(s.acquire_operating_room(p(4)), None);
        assert_eq!(s.release(Resource::OperatingRoom(OperatingRoomId(0))), Ok(p(3)));
        assert_eq!(s.acquire_operating_room(p(4)), Some(OperatingRoomId(0)));
    }

    #[test]
    fn heap_policy_makes_the_same_decisions() {
        let ids: Vec<u32> = (0..8).collect();
        let patience: Vec<(u32, f64)> =
            ids.iter().map(|&i| (i, [30.0, 10.0, 10.0, 70.0][i as usize % 4])).collect();
        let ward = Ward::new(&patience);

        let mut linear = scheduler_with(2, 1, &ids);
        let mut heap = ReceptionScheduler::with_policy(&config(2, 1), MinHeap);
        for &i in &ids {
            heap.enqueue(p(i)).unwrap();
        }
        for tick in 0..40 {
            assert_eq!(linear.tick(DT, ward.lookup()), heap.tick(DT, ward.lookup()), "tick {tick}");
            if tick % 3 == 2 {
                let a = linear.release(Resource::Room(RoomId(0)));
                let b = heap.release(Resource::Room(RoomId(0)));
                assert_eq!(a, b);
            }
        }
    }
}

//! Unit tests for hs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PatientId, RoomId};

    #[test]
    fn ordering() {
        assert!(PatientId(0) < PatientId(1));
        assert!(RoomId(3) > RoomId(2));
    }

    #[test]
    fn display() {
        assert_eq!(PatientId(7).to_string(), "PatientId(7)");
    }
}

#[cfg(test)]
mod site {
    use crate::{Diagnosis, ExitId, OperatingRoomId, Resource, RoomId, SeatId, Waypoint};

    #[test]
    fn resource_waypoints() {
        assert_eq!(Resource::Seat(SeatId(1)).waypoint(), Waypoint::Seat(SeatId(1)));
        assert_eq!(Resource::Room(RoomId(2)).waypoint(), Waypoint::Room(RoomId(2)));
        assert_eq!(
            Resource::OperatingRoom(OperatingRoomId(0)).waypoint(),
            Waypoint::OperatingRoom(OperatingRoomId(0))
        );
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(Waypoint::Exit(ExitId(0)).to_string(), "exit 0");
        assert_eq!(Resource::Room(RoomId(4)).to_string(), "room 4");
    }

    #[test]
    fn diagnosis_requires_operation() {
        assert!(!Diagnosis::Discharge.requires_operation());
        assert!(Diagnosis::RequiresOperation(OperatingRoomId(0)).requires_operation());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_accumulates_variable_steps() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(1.5);
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs - 2.0).abs() < 1e-12);
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        clock.advance(3_725.0);
        assert_eq!(clock.to_string(), "T1 (01:02:05)");
    }
}

#[cfg(test)]
mod config {
    use crate::HospitalConfig;

    #[test]
    fn default_is_valid() {
        let cfg = HospitalConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_patience, 100.0);
        assert_eq!(cfg.patience_decay_per_sec, 0.5);
    }

    #[test]
    fn horizon_matches_decay() {
        let cfg = HospitalConfig::default();
        assert_eq!(cfg.patience_horizon_secs(), Some(200.0));
        let frozen = HospitalConfig { patience_decay_per_sec: 0.0, ..cfg };
        assert_eq!(frozen.patience_horizon_secs(), None);
    }

    #[test]
    fn rejects_bad_values() {
        let base = HospitalConfig::default();
        assert!(HospitalConfig { max_patience: 0.0, ..base.clone() }.validate().is_err());
        assert!(HospitalConfig { patience_decay_per_sec: -1.0, ..base.clone() }.validate().is_err());
        assert!(HospitalConfig { tick_secs: f64::NAN, ..base.clone() }.validate().is_err());
        assert!(HospitalConfig { notify_walk_secs: f64::INFINITY, ..base.clone() }.validate().is_err());
        assert!(HospitalConfig { exits: 0, ..base }.validate().is_err());
    }

    #[test]
    fn zero_capacity_is_allowed() {
        let cfg = HospitalConfig {
            waiting_seats:      0,
            consultation_rooms: 0,
            operating_rooms:    0,
            ..HospitalConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::{PatientId, PatientRng, SimRng};

    #[test]
    fn patient_rng_is_deterministic() {
        let mut a = PatientRng::new(42, PatientId(3));
        let mut b = PatientRng::new(42, PatientId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1_000u32), b.gen_range(0..1_000u32));
        }
    }

    #[test]
    fn patients_get_distinct_streams() {
        let mut a = PatientRng::new(42, PatientId(0));
        let mut b = PatientRng::new(42, PatientId(1));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = PatientRng::new(0, PatientId(0));
        assert!(rng.gen_bool(2.0));
        assert!(!rng.gen_bool(-1.0));
    }

    #[test]
    fn exp_gap_is_non_negative() {
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            let gap = rng.exp_gap(30.0);
            assert!(gap >= 0.0 && gap.is_finite());
        }
        assert_eq!(rng.exp_gap(0.0), 0.0);
    }
}

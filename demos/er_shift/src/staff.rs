//! Scripted doctors, orderlies and surgeons.
//!
//! Each step the staff look over the ward, book a job for every patient who
//! needs one (a verdict, a transfer, an operation) with a randomly drawn
//! duration, and carry out the jobs that have come due.  Draws come from a
//! per-patient RNG so one patient's treatment does not depend on how many
//! others were seen first.

use std::collections::BTreeMap;

use log::{debug, warn};

use hs_core::{PatientId, PatientRng};
use hs_mobility::Mover;
use hs_patient::PatientState;
use hs_reception::SelectionPolicy;
use hs_sim::{Hospital, SimError, World};

/// Share of consultations that end in surgery.
const SURGERY_PROBABILITY: f64 = 0.25;

/// Seconds before asking again when every operating room is taken.
const OPERATING_ROOM_RETRY_SECS: f64 = 60.0;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Need {
    Verdict,
    Orderly,
    Surgeon,
}

fn need_of(state: PatientState, diagnosed: bool) -> Option<Need> {
    match state {
        PatientState::AwaitingDiagnosis { .. } if !diagnosed => Some(Need::Verdict),
        PatientState::AwaitingTransfer { .. } => Some(Need::Orderly),
        PatientState::BeingOperated { .. } => Some(Need::Surgeon),
        _ => None,
    }
}

struct Booking {
    need:     Need,
    due_secs: f64,
    /// Decided when the consultation starts so retries keep the verdict.
    surgery:  bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StaffCounts {
    pub verdicts:             u64,
    pub transfers:            u64,
    pub operations:           u64,
    pub operating_room_waits: u64,
}

pub struct Staff {
    seed:     u64,
    rngs:     BTreeMap<PatientId, PatientRng>,
    bookings: BTreeMap<PatientId, Booking>,
    pub counts: StaffCounts,
}

impl Staff {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rngs:     BTreeMap::new(),
            bookings: BTreeMap::new(),
            counts:   StaffCounts::default(),
        }
    }

    /// Book new jobs and finish the ones due by the hospital's clock.
    pub fn work<M: Mover, W: World, P: SelectionPolicy>(&mut self, hospital: &mut Hospital<M, W, P>) {
        let now = hospital.clock().elapsed_secs;

        let needs: BTreeMap<PatientId, Need> = hospital
            .patients()
            .filter_map(|p| Some((p.id(), need_of(p.state(), p.diagnosis().is_some())?)))
            .collect();

        // Patients who moved on no longer need what was booked for them.
        self.bookings.retain(|id, b| needs.get(id) == Some(&b.need));
        let present: Vec<PatientId> = hospital.patients().map(|p| p.id()).collect();
        self.rngs.retain(|id, _| present.binary_search(id).is_ok());

        for (&id, &need) in &needs {
            if self.bookings.contains_key(&id) {
                continue;
            }
            let seed = self.seed;
            let rng = self.rngs.entry(id).or_insert_with(|| PatientRng::new(seed, id));
            let secs = match need {
                Need::Verdict => rng.gen_range(60.0..240.0),
                Need::Orderly => rng.gen_range(30.0..120.0),
                Need::Surgeon => rng.gen_range(600.0..1_800.0),
            };
            let surgery = need == Need::Verdict && rng.gen_bool(SURGERY_PROBABILITY);
            debug!("{id}: {need:?} booked for {secs:.0}s from now");
            self.bookings.insert(id, Booking { need, due_secs: now + secs, surgery });
        }

        let due: Vec<PatientId> = self
            .bookings
            .iter()
            .filter(|(_, b)| b.due_secs <= now)
            .map(|(&id, _)| id)
            .collect();

        for id in due {
            let Some(booking) = self.bookings.get_mut(&id) else { continue };
            let result = match booking.need {
                Need::Verdict => hospital.submit_diagnosis(id, booking.surgery, None),
                Need::Orderly => hospital.orderly_arrived(id),
                Need::Surgeon => hospital.operation_completed(id),
            };
            match result {
                Ok(()) => {
                    match booking.need {
                        Need::Verdict => self.counts.verdicts += 1,
                        Need::Orderly => self.counts.transfers += 1,
                        Need::Surgeon => self.counts.operations += 1,
                    }
                    self.bookings.remove(&id);
                }
                Err(SimError::NoOperatingRoomFree(_)) => {
                    self.counts.operating_room_waits += 1;
                    booking.due_secs = now + OPERATING_ROOM_RETRY_SECS;
                }
                Err(e) => {
                    warn!("{id}: staff could not act: {e}");
                    self.bookings.remove(&id);
                }
            }
        }
    }
}

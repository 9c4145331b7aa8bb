//! The `Hospital` struct and its step loop.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use hs_core::{
    Diagnosis, HospitalConfig, HsError, OperatingRoomId, PatientId, Resource, SimClock, Waypoint,
};
use hs_mobility::{MobilityResult, Mover};
use hs_patient::{PatientAgent, PatientBuilder, PatientEffect, PatientState};
use hs_reception::{Assignment, Grant, LinearScan, ReceptionScheduler, SelectionPolicy};

use crate::{
    Arrival, ArrivalSchedule, HospitalObserver, HospitalStats, NullWorld, SimError, SimResult,
    TickSummary, Transition, World,
};

/// The simulation runner: patients, the reception, and the world they report
/// into.
///
/// Patients are stored in a `BTreeMap` so every pass visits them in
/// ascending `PatientId` order.  Create via
/// [`HospitalBuilder`][crate::HospitalBuilder].
pub struct Hospital<M: Mover, W: World = NullWorld, P: SelectionPolicy = LinearScan> {
    config:    HospitalConfig,
    clock:     SimClock,
    patients:  BTreeMap<PatientId, PatientAgent<M>>,
    reception: ReceptionScheduler<P>,
    world:     W,
    next_id:   u32,
    stats:     HospitalStats,
}

impl<M: Mover, W: World, P: SelectionPolicy> Hospital<M, W, P> {
    pub(crate) fn new(config: HospitalConfig, reception: ReceptionScheduler<P>, world: W) -> Self {
        Self {
            config,
            clock: SimClock::new(),
            patients: BTreeMap::new(),
            reception,
            world,
            next_id: 0,
            stats: HospitalStats::default(),
        }
    }

    // ── Admission ─────────────────────────────────────────────────────────

    /// Validate `builder` and let the patient in.  It registers at the desk
    /// on its first pass.
    ///
    /// A refused patient is counted in [`HospitalStats::rejected`] and the
    /// hospital carries on.
    pub fn admit(&mut self, builder: PatientBuilder<M>) -> SimResult<PatientId> {
        let id = PatientId(self.next_id);
        match builder.build(id, &self.config) {
            Ok(patient) => {
                self.next_id += 1;
                self.patients.insert(id, patient);
                self.stats.admitted += 1;
                info!("{id}: admitted at {}", self.clock);
                Ok(id)
            }
            Err(e) => {
                self.stats.rejected += 1;
                warn!("admission refused at {}: {e}", self.clock);
                Err(e.into())
            }
        }
    }

    /// Admit every arrival in `schedule` that is due by now.
    ///
    /// `make_mover` equips each arrival; arrivals it or the builder reject
    /// are logged, counted and skipped.
    pub fn admit_due<F>(&mut self, schedule: &mut ArrivalSchedule, mut make_mover: F) -> Vec<PatientId>
    where
        F: FnMut(&Arrival) -> MobilityResult<M>,
    {
        let mut admitted = Vec::new();
        for arrival in schedule.due(self.clock.elapsed_secs) {
            let mover = match make_mover(&arrival) {
                Ok(mover) => mover,
                Err(e) => {
                    self.stats.rejected += 1;
                    warn!("arrival due at {:.1}s turned away: {e}", arrival.at_secs);
                    continue;
                }
            };
            let builder = PatientBuilder::new()
                .injured(arrival.injured)
                .mover(mover)
                .exit(arrival.exit);
            if let Ok(id) = self.admit(builder) {
                admitted.push(id);
            }
        }
        admitted
    }

    // ── Staff events ──────────────────────────────────────────────────────

    /// The doctor's verdict for a patient on the examination gurney.
    ///
    /// When surgery is needed the operating room is reserved here:
    /// `operating_room` if given, otherwise the lowest free one.  If the
    /// patient refuses the verdict the reservation is dropped again.
    pub fn submit_diagnosis(
        &mut self,
        patient:            PatientId,
        requires_operation: bool,
        operating_room:     Option<OperatingRoomId>,
    ) -> SimResult<()> {
        let agent = self
            .patients
            .get_mut(&patient)
            .ok_or(HsError::PatientNotFound(patient))?;

        if !requires_operation {
            agent.submit_diagnosis(Diagnosis::Discharge)?;
            return Ok(());
        }

        let or = match operating_room {
            Some(or) => {
                self.reception.claim_operating_room(or, patient)?;
                or
            }
            None => self
                .reception
                .acquire_operating_room(patient)
                .ok_or(SimError::NoOperatingRoomFree(patient))?,
        };

        if let Err(e) = agent.submit_diagnosis(Diagnosis::RequiresOperation(or)) {
            if let Err(release) = self.reception.release(Resource::OperatingRoom(or)) {
                warn!("{patient}: could not drop reservation of {or}: {release}");
            }
            return Err(e.into());
        }
        Ok(())
    }

    /// An orderly reached the patient's consultation room.
    pub fn orderly_arrived(&mut self, patient: PatientId) -> SimResult<()> {
        self.patient_mut(patient)?.orderly_arrived()?;
        Ok(())
    }

    /// The surgeon finished.
    pub fn operation_completed(&mut self, patient: PatientId) -> SimResult<()> {
        self.patient_mut(patient)?.operation_completed()?;
        Ok(())
    }

    // ── Drivers ───────────────────────────────────────────────────────────

    /// Step `config.tick_secs` at a time until `config.total_ticks` have run.
    pub fn run<O: HospitalObserver>(&mut self, observer: &mut O) -> SimResult<HospitalStats> {
        while self.clock.current_tick.0 < self.config.total_ticks {
            self.advance(self.config.tick_secs, observer)?;
        }
        observer.on_sim_end(&self.clock, &self.stats);
        Ok(self.stats)
    }

    /// Run exactly `n` steps of `config.tick_secs` (ignores `total_ticks`).
    pub fn run_ticks<O: HospitalObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.advance(self.config.tick_secs, observer)?;
        }
        Ok(())
    }

    /// Run one step covering `dt_secs` of simulated time.
    pub fn advance<O: HospitalObserver>(
        &mut self,
        dt_secs:  f64,
        observer: &mut O,
    ) -> SimResult<TickSummary> {
        if !(dt_secs.is_finite() && dt_secs >= 0.0) {
            return Err(SimError::InvalidStep(dt_secs));
        }
        observer.on_tick_start(&self.clock);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let Self { clock, patients, reception, world, stats, .. } = self;

        // ── ① Movers ──────────────────────────────────────────────────────
        for patient in patients.values_mut() {
            patient.mover_mut().advance(dt_secs);
        }

        // ── ② Patient passes, effects applied in PatientId order ─────────
        let mut exited = Vec::new();
        for (&id, patient) in patients.iter_mut() {
            let from = patient.state();
            let effects = patient.tick(dt_secs);
            let to = patient.state();
            if from != to {
                if to == PatientState::Abandoning {
                    stats.abandoned += 1;
                }
                let transition = Transition { patient: id, from, to, patience: patient.patience() };
                observer.on_transition(clock, &transition);
            }
            for effect in effects {
                apply_effect(id, effect, reception, world, stats, &mut exited);
            }
        }

        // ── ③ Reception ───────────────────────────────────────────────────
        let assignment = reception.tick(dt_secs, |id| {
            patients
                .get(&id)
                .filter(|p| !p.is_exited())
                .map(|p| p.patience())
        });
        let assigned = match assignment {
            Some(assignment) => deliver(assignment, patients, reception, clock, observer),
            None => false,
        };

        // ── ④ Deferred cleanup ────────────────────────────────────────────
        for &id in &exited {
            patients.remove(&id);
            world.destroy_entity(id);
            stats.exited += 1;
            info!("{id}: left the building at {clock}");
        }

        let summary = TickSummary {
            tick:                 clock.current_tick,
            elapsed_secs:         clock.elapsed_secs,
            active:               patients.len(),
            desk_queue:           reception.queue_len(),
            waiting_room:         reception.waiting_room_len(),
            free_seats:           reception.seats().free_count(),
            free_rooms:           reception.rooms().free_count(),
            free_operating_rooms: reception.operating_rooms().free_count(),
            assigned,
            exited:               exited.len(),
        };
        observer.on_tick_end(clock, &summary);
        clock.advance(dt_secs);
        Ok(summary)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &HospitalConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn stats(&self) -> &HospitalStats {
        &self.stats
    }

    #[inline]
    pub fn reception(&self) -> &ReceptionScheduler<P> {
        &self.reception
    }

    #[inline]
    pub fn world(&self) -> &W {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn into_world(self) -> W {
        self.world
    }

    pub fn patient(&self, id: PatientId) -> Option<&PatientAgent<M>> {
        self.patients.get(&id)
    }

    /// Patients still in the building, in `PatientId` order.
    pub fn patients(&self) -> impl Iterator<Item = &PatientAgent<M>> + '_ {
        self.patients.values()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.patients.len()
    }

    fn patient_mut(&mut self, id: PatientId) -> SimResult<&mut PatientAgent<M>> {
        Ok(self.patients.get_mut(&id).ok_or(HsError::PatientNotFound(id))?)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn apply_effect<P: SelectionPolicy, W: World>(
    id:        PatientId,
    effect:    PatientEffect,
    reception: &mut ReceptionScheduler<P>,
    world:     &mut W,
    stats:     &mut HospitalStats,
    exited:    &mut Vec<PatientId>,
) {
    match effect {
        PatientEffect::JoinQueue => {
            if let Err(e) = reception.enqueue(id) {
                warn!("{id}: could not join the desk queue: {e}");
            }
        }
        PatientEffect::LeaveQueue => {
            if let Err(e) = reception.withdraw(id) {
                warn!("{id}: could not leave reception: {e}");
            }
        }
        PatientEffect::Release(resource) => {
            if let Err(e) = reception.release(resource) {
                warn!("{id}: could not release {resource}: {e}");
            }
        }
        PatientEffect::DropPayment { at } => {
            world.spawn_money_drop(id, at);
            stats.payments += 1;
            match at {
                Waypoint::OperatingRoom(_) => stats.operated += 1,
                _ => stats.discharged += 1,
            }
            info!("{id}: paid at {at}");
        }
        PatientEffect::Exited => exited.push(id),
    }
}

/// Hand the reception's grant to the patient.  A refused grant goes back to
/// its pool and the patient goes back in line, unless it has moved on.
fn deliver<M: Mover, P: SelectionPolicy, O: HospitalObserver>(
    assignment: Assignment,
    patients:   &mut BTreeMap<PatientId, PatientAgent<M>>,
    reception:  &mut ReceptionScheduler<P>,
    clock:      &SimClock,
    observer:   &mut O,
) -> bool {
    let Assignment { patient: id, grant } = assignment;

    let outcome: SimResult<Transition> = match patients.get_mut(&id) {
        Some(patient) => {
            let from = patient.state();
            let accepted = match grant {
                Grant::Seat(seat) => patient.assign_seat(seat),
                Grant::Room(room) => patient.assign_room(room),
            };
            accepted
                .map(|()| Transition {
                    patient:  id,
                    from,
                    to:       patient.state(),
                    patience: patient.patience(),
                })
                .map_err(SimError::from)
        }
        None => Err(HsError::PatientNotFound(id).into()),
    };

    match outcome {
        Ok(transition) => {
            debug!("{id}: granted {}", grant.resource());
            observer.on_assignment(clock, &assignment);
            observer.on_transition(clock, &transition);
            true
        }
        Err(e) => {
            warn!("{id}: grant of {} refused, returning it: {e}", grant.resource());
            if let Err(e) = reception.refuse(assignment) {
                warn!("{id}: could not take back {}: {e}", grant.resource());
            }
            // Only a patient still waiting at the desk keeps its place in line.
            let in_line = patients
                .get(&id)
                .is_some_and(|p| p.state() == PatientState::AwaitingQueue);
            if !in_line {
                if let Err(e) = reception.withdraw(id) {
                    warn!("{id}: could not drop from reception: {e}");
                }
            }
            false
        }
    }
}

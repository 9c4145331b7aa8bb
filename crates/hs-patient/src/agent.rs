//! The patient state machine.

use log::{debug, info, warn};

use hs_core::{
    Diagnosis, ExitId, OperatingRoomId, PatientId, Resource, RoomId, SeatId, Waypoint,
};
use hs_mobility::Mover;

use crate::{PatientEffect, PatientError, PatientResult, PatientState, Posture};

/// One patient's visit, from the door to the exit.
///
/// Create through [`PatientBuilder`][crate::PatientBuilder].  The hospital
/// calls [`tick`][Self::tick] exactly once per simulation step and applies
/// the returned effects; everything else arrives as an inbound event method.
pub struct PatientAgent<M: Mover> {
    id:                  PatientId,
    injured:             bool,
    patience:            f64,
    decay_per_sec:       f64,
    exit:                ExitId,
    state:               PatientState,
    posture:             Posture,
    diagnosis:           Option<Diagnosis>,
    orderly_arrived:     bool,
    operation_completed: bool,
    mover:               M,
}

impl<M: Mover> PatientAgent<M> {
    pub(crate) fn new(
        id:            PatientId,
        injured:       bool,
        patience:      f64,
        decay_per_sec: f64,
        exit:          ExitId,
        mover:         M,
    ) -> Self {
        Self {
            id,
            injured,
            patience,
            decay_per_sec,
            exit,
            state:               PatientState::Arriving,
            posture:             Posture::Upright,
            diagnosis:           None,
            orderly_arrived:     false,
            operation_completed: false,
            mover,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PatientId {
        self.id
    }

    #[inline]
    pub fn patience(&self) -> f64 {
        self.patience
    }

    #[inline]
    pub fn is_injured(&self) -> bool {
        self.injured
    }

    #[inline]
    pub fn state(&self) -> PatientState {
        self.state
    }

    #[inline]
    pub fn posture(&self) -> Posture {
        self.posture
    }

    #[inline]
    pub fn diagnosis(&self) -> Option<Diagnosis> {
        self.diagnosis
    }

    #[inline]
    pub fn exit(&self) -> ExitId {
        self.exit
    }

    #[inline]
    pub fn is_exited(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn assigned_seat(&self) -> Option<SeatId> {
        match self.state {
            PatientState::AwaitingWaitingRoom { seat } => Some(seat),
            _ => None,
        }
    }

    pub fn assigned_room(&self) -> Option<RoomId> {
        match self.state {
            PatientState::MovingToConsult { room }
            | PatientState::AwaitingDiagnosis { room }
            | PatientState::AwaitingTransfer { room, .. } => Some(room),
            _ => None,
        }
    }

    pub fn assigned_operating_room(&self) -> Option<OperatingRoomId> {
        match self.state {
            PatientState::AwaitingTransfer { operating_room, .. }
            | PatientState::MovingToOperatingRoom { operating_room }
            | PatientState::BeingOperated { operating_room } => Some(operating_room),
            PatientState::AwaitingDiagnosis { .. } => match self.diagnosis {
                Some(Diagnosis::RequiresOperation(operating_room)) => Some(operating_room),
                _ => None,
            },
            _ => None,
        }
    }

    #[inline]
    pub fn mover(&self) -> &M {
        &self.mover
    }

    #[inline]
    pub fn mover_mut(&mut self) -> &mut M {
        &mut self.mover
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one evaluation pass covering `dt_secs` of simulated time.
    ///
    /// Patience is checked first; a patient that runs out abandons and no
    /// other rule runs this tick.
    pub fn tick(&mut self, dt_secs: f64) -> Vec<PatientEffect> {
        let mut effects = Vec::new();

        if self.state.decays_patience() {
            self.patience = (self.patience - self.decay_per_sec * dt_secs).max(0.0);
            if self.patience <= 0.0 {
                self.abandon(&mut effects);
                return effects;
            }
        }

        match self.state {
            PatientState::Arriving => {
                self.head_for(Waypoint::ReceptionDesk);
                effects.push(PatientEffect::JoinQueue);
                self.transition(PatientState::AwaitingQueue);
            }

            PatientState::AwaitingQueue => {}

            PatientState::AwaitingWaitingRoom { seat } => {
                if self.posture != Posture::Seated && self.walk_to(Waypoint::Seat(seat)) {
                    self.settle(Posture::Seated);
                }
            }

            PatientState::MovingToConsult { room } => {
                if self.walk_to(Waypoint::Room(room)) {
                    self.settle(Posture::OnGurney);
                    self.transition(PatientState::AwaitingDiagnosis { room });
                }
            }

            PatientState::AwaitingDiagnosis { room } => match self.diagnosis {
                None => {}
                Some(Diagnosis::Discharge) => {
                    effects.push(PatientEffect::Release(Resource::Room(room)));
                    self.pay_and_leave(Waypoint::Room(room), &mut effects);
                }
                Some(Diagnosis::RequiresOperation(operating_room)) => {
                    if self.injured {
                        self.transition(PatientState::AwaitingTransfer { room, operating_room });
                    } else {
                        effects.push(PatientEffect::Release(Resource::Room(room)));
                        self.head_for(Waypoint::OperatingRoom(operating_room));
                        self.transition(PatientState::MovingToOperatingRoom { operating_room });
                    }
                }
            },

            PatientState::AwaitingTransfer { room, operating_room } => {
                if self.orderly_arrived {
                    effects.push(PatientEffect::Release(Resource::Room(room)));
                    self.head_for(Waypoint::OperatingRoom(operating_room));
                    self.transition(PatientState::MovingToOperatingRoom { operating_room });
                }
            }

            PatientState::MovingToOperatingRoom { operating_room } => {
                if self.walk_to(Waypoint::OperatingRoom(operating_room)) {
                    self.settle(Posture::OnGurney);
                    self.transition(PatientState::BeingOperated { operating_room });
                }
            }

            PatientState::BeingOperated { operating_room } => {
                if self.operation_completed {
                    effects.push(PatientEffect::Release(Resource::OperatingRoom(operating_room)));
                    self.pay_and_leave(Waypoint::OperatingRoom(operating_room), &mut effects);
                }
            }

            PatientState::Departing | PatientState::Abandoning => {
                if self.walk_to(Waypoint::Exit(self.exit)) {
                    effects.push(PatientEffect::Exited);
                    self.transition(PatientState::Exited);
                }
            }

            PatientState::Exited => {}
        }

        effects
    }

    // ── Inbound events ────────────────────────────────────────────────────

    /// The reception granted a waiting-room seat.
    pub fn assign_seat(&mut self, seat: SeatId) -> PatientResult<()> {
        if self.state != PatientState::AwaitingQueue {
            return Err(self.reject("seat assignment"));
        }
        self.head_for(Waypoint::Seat(seat));
        self.transition(PatientState::AwaitingWaitingRoom { seat });
        Ok(())
    }

    /// The reception granted a consultation room.
    ///
    /// Accepted from the desk queue or the waiting room; a seated patient
    /// stands up.  Any diagnosis from an earlier consultation is cleared.
    pub fn assign_room(&mut self, room: RoomId) -> PatientResult<()> {
        match self.state {
            PatientState::AwaitingQueue | PatientState::AwaitingWaitingRoom { .. } => {}
            _ => return Err(self.reject("room assignment")),
        }
        self.diagnosis = None;
        self.orderly_arrived = false;
        self.operation_completed = false;
        self.head_for(Waypoint::Room(room));
        self.transition(PatientState::MovingToConsult { room });
        Ok(())
    }

    /// The doctor's verdict.  Acted on at the next tick.
    pub fn submit_diagnosis(&mut self, diagnosis: Diagnosis) -> PatientResult<()> {
        if !matches!(self.state, PatientState::AwaitingDiagnosis { .. }) || self.diagnosis.is_some() {
            return Err(self.reject("diagnosis"));
        }
        debug!("{}: diagnosed {:?}", self.id, diagnosis);
        self.diagnosis = Some(diagnosis);
        Ok(())
    }

    /// An orderly is at the bedside to wheel the patient to surgery.
    pub fn orderly_arrived(&mut self) -> PatientResult<()> {
        if !matches!(self.state, PatientState::AwaitingTransfer { .. }) || self.orderly_arrived {
            return Err(self.reject("orderly arrival"));
        }
        self.orderly_arrived = true;
        Ok(())
    }

    /// The surgeon is done.
    pub fn operation_completed(&mut self) -> PatientResult<()> {
        if !matches!(self.state, PatientState::BeingOperated { .. }) || self.operation_completed {
            return Err(self.reject("operation completion"));
        }
        self.operation_completed = true;
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Give back whatever is held and walk out without paying.
    fn abandon(&mut self, effects: &mut Vec<PatientEffect>) {
        match self.state {
            PatientState::AwaitingQueue | PatientState::AwaitingWaitingRoom { .. } => {
                effects.push(PatientEffect::LeaveQueue);
            }
            PatientState::MovingToConsult { room } => {
                effects.push(PatientEffect::Release(Resource::Room(room)));
            }
            PatientState::AwaitingDiagnosis { room } => {
                effects.push(PatientEffect::Release(Resource::Room(room)));
                // The operating room was reserved when the verdict came in.
                if let Some(Diagnosis::RequiresOperation(operating_room)) = self.diagnosis {
                    effects.push(PatientEffect::Release(Resource::OperatingRoom(operating_room)));
                }
            }
            PatientState::AwaitingTransfer { room, operating_room } => {
                effects.push(PatientEffect::Release(Resource::Room(room)));
                effects.push(PatientEffect::Release(Resource::OperatingRoom(operating_room)));
            }
            PatientState::MovingToOperatingRoom { operating_room }
            | PatientState::BeingOperated { operating_room } => {
                effects.push(PatientEffect::Release(Resource::OperatingRoom(operating_room)));
            }
            PatientState::Arriving
            | PatientState::Departing
            | PatientState::Abandoning
            | PatientState::Exited => {}
        }
        info!("{}: out of patience, abandoning from {}", self.id, self.state);
        self.head_for(Waypoint::Exit(self.exit));
        self.transition(PatientState::Abandoning);
    }

    fn pay_and_leave(&mut self, at: Waypoint, effects: &mut Vec<PatientEffect>) {
        effects.push(PatientEffect::DropPayment { at });
        self.head_for(Waypoint::Exit(self.exit));
        self.transition(PatientState::Departing);
    }

    /// Stand up if needed and head for `target`.
    fn head_for(&mut self, target: Waypoint) {
        self.posture = Posture::Upright;
        self.mover.move_to(target);
    }

    /// Keep heading for `target`; `true` once there.
    fn walk_to(&mut self, target: Waypoint) -> bool {
        if self.mover.has_arrived(target) {
            return true;
        }
        self.mover.move_to(target);
        false
    }

    fn settle(&mut self, posture: Posture) {
        self.mover.stop();
        self.posture = posture;
    }

    fn transition(&mut self, next: PatientState) {
        debug!("{}: {} -> {}", self.id, self.state, next);
        self.state = next;
    }

    fn reject(&self, event: &'static str) -> PatientError {
        warn!("{}: ignoring {} while {}", self.id, event, self.state);
        PatientError::InvalidTransition {
            patient: self.id,
            event,
            state:   self.state.name(),
        }
    }
}

//! Patient lifecycle states.

use std::fmt;

use hs_core::{OperatingRoomId, Resource, RoomId, SeatId};

/// Where a patient is in its visit.
///
/// Each variant carries exactly the resource handles that are meaningful in
/// that state, so "holds a room while queueing at the desk" cannot be
/// expressed.
///
/// ```text
/// Arriving → AwaitingQueue → (AwaitingWaitingRoom) → MovingToConsult
///   → AwaitingDiagnosis → (AwaitingTransfer) → MovingToOperatingRoom
///   → BeingOperated → Departing → Exited
///
/// any waiting/treatment state ──patience ≤ 0──► Abandoning → Exited
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PatientState {
    /// Just came through the door; registers at the desk on its first tick.
    Arriving,
    /// In the front-desk queue with neither seat nor room.
    AwaitingQueue,
    /// Holds a waiting-room seat (walking to it or sitting on it).
    AwaitingWaitingRoom { seat: SeatId },
    /// Walking to an assigned consultation room.
    MovingToConsult { room: RoomId },
    /// On the examination gurney, waiting for the doctor's verdict.
    AwaitingDiagnosis { room: RoomId },
    /// Injured and bound for surgery: still in the consultation room until
    /// an orderly comes; the operating room is already reserved.
    AwaitingTransfer { room: RoomId, operating_room: OperatingRoomId },
    /// On the way to the operating room.
    MovingToOperatingRoom { operating_room: OperatingRoomId },
    /// On the operating table.
    BeingOperated { operating_room: OperatingRoomId },
    /// Treated and paid; walking to the exit.
    Departing,
    /// Ran out of patience; walking to the exit without paying.
    Abandoning,
    /// Left the building.  Terminal.
    Exited,
}

impl PatientState {
    /// Short stable name, used in logs and output files.
    pub fn name(&self) -> &'static str {
        match self {
            PatientState::Arriving                   => "arriving",
            PatientState::AwaitingQueue              => "awaiting_queue",
            PatientState::AwaitingWaitingRoom { .. } => "awaiting_waiting_room",
            PatientState::MovingToConsult { .. }     => "moving_to_consult",
            PatientState::AwaitingDiagnosis { .. }   => "awaiting_diagnosis",
            PatientState::AwaitingTransfer { .. }    => "awaiting_transfer",
            PatientState::MovingToOperatingRoom { .. } => "moving_to_operating_room",
            PatientState::BeingOperated { .. }       => "being_operated",
            PatientState::Departing                  => "departing",
            PatientState::Abandoning                 => "abandoning",
            PatientState::Exited                     => "exited",
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, PatientState::Exited)
    }

    /// `Departing` or `Abandoning`: heading out, patience no longer matters.
    #[inline]
    pub fn is_exiting(&self) -> bool {
        matches!(self, PatientState::Departing | PatientState::Abandoning)
    }

    /// Patience decays (and can run out) in every other state.
    #[inline]
    pub fn decays_patience(&self) -> bool {
        !self.is_exiting() && !self.is_terminal()
    }

    /// The single resource the patient physically occupies in this state.
    pub fn occupied(&self) -> Option<Resource> {
        match *self {
            PatientState::AwaitingWaitingRoom { seat } => Some(Resource::Seat(seat)),
            PatientState::MovingToConsult { room }
            | PatientState::AwaitingDiagnosis { room }
            | PatientState::AwaitingTransfer { room, .. } => Some(Resource::Room(room)),
            PatientState::MovingToOperatingRoom { operating_room }
            | PatientState::BeingOperated { operating_room } => {
                Some(Resource::OperatingRoom(operating_room))
            }
            _ => None,
        }
    }
}

impl fmt::Display for PatientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical posture.  Sitting or lying implies the mover is stopped.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Posture {
    #[default]
    Upright,
    Seated,
    OnGurney,
}

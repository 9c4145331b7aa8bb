//! Places a patient can walk to, resources a patient can hold, and the
//! outcome of a consultation.

use std::fmt;

use crate::{ExitId, OperatingRoomId, RoomId, SeatId};

/// A named target for the movement capability.
///
/// The simulation core never deals in coordinates: it asks the mover to head
/// for a `Waypoint` and later asks whether it has arrived there.  Mapping a
/// waypoint to a physical position is the mover's business.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Waypoint {
    ReceptionDesk,
    Seat(SeatId),
    Room(RoomId),
    OperatingRoom(OperatingRoomId),
    Exit(ExitId),
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waypoint::ReceptionDesk    => f.write_str("reception"),
            Waypoint::Seat(s)          => write!(f, "seat {}", s.0),
            Waypoint::Room(r)          => write!(f, "room {}", r.0),
            Waypoint::OperatingRoom(o) => write!(f, "operating room {}", o.0),
            Waypoint::Exit(e)          => write!(f, "exit {}", e.0),
        }
    }
}

/// A scarce resource handle, exclusively owned by at most one patient.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    Seat(SeatId),
    Room(RoomId),
    OperatingRoom(OperatingRoomId),
}

impl Resource {
    /// Where a patient holding this resource physically goes.
    #[inline]
    pub fn waypoint(self) -> Waypoint {
        match self {
            Resource::Seat(s)          => Waypoint::Seat(s),
            Resource::Room(r)          => Waypoint::Room(r),
            Resource::OperatingRoom(o) => Waypoint::OperatingRoom(o),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.waypoint().fmt(f)
    }
}

impl From<SeatId> for Resource {
    fn from(seat: SeatId) -> Self {
        Resource::Seat(seat)
    }
}

impl From<RoomId> for Resource {
    fn from(room: RoomId) -> Self {
        Resource::Room(room)
    }
}

impl From<OperatingRoomId> for Resource {
    fn from(operating_room: OperatingRoomId) -> Self {
        Resource::OperatingRoom(operating_room)
    }
}

/// Outcome of a consultation, delivered once per visit.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnosis {
    /// The patient pays and leaves.
    Discharge,
    /// The patient must be operated on in the given operating room.
    RequiresOperation(OperatingRoomId),
}

impl Diagnosis {
    #[inline]
    pub fn requires_operation(self) -> bool {
        matches!(self, Diagnosis::RequiresOperation(_))
    }
}

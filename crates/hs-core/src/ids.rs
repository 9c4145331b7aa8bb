//! Strongly typed, zero-cost identifier wrappers.
//!
//! Patients and every kind of scarce resource get their own ID type so a
//! seat handle can never be passed where a room handle is expected.  All IDs
//! are `Copy + Ord + Hash`; the `Ord` impl is what gives the scheduler's
//! arena pools their deterministic "lowest free handle first" behaviour.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of one patient visit.  Assigned by the hospital at admission
    /// and never reused within a run.
    pub struct PatientId(u32);
}

typed_id! {
    /// A chair in the waiting room.
    pub struct SeatId(u16);
}

typed_id! {
    /// A consultation room.
    pub struct RoomId(u16);
}

typed_id! {
    /// An operating room.
    pub struct OperatingRoomId(u16);
}

typed_id! {
    /// One of the hospital's exits.
    pub struct ExitId(u8);
}

//! Per-mover movement state.

use hs_core::Waypoint;

/// The movement state for a single mover.
///
/// A mover is either **stationary** (`target == None`) at `position`, or
/// **in transit** towards `target`, in which case it logically remains at
/// `position` (where it departed from) until `remaining_secs` runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// Last waypoint reached.  `None` before the first arrival (the patient
    /// is still at the hospital door).
    pub position: Option<Waypoint>,
    /// Where the mover is heading, if in transit.
    pub target: Option<Waypoint>,
    /// Seconds left on the current leg.  `0.0` when stationary.
    pub remaining_secs: f64,
}

impl MovementState {
    /// A mover that has not moved yet.
    pub fn at_door() -> Self {
        Self { position: None, target: None, remaining_secs: 0.0 }
    }

    #[inline]
    pub fn in_transit(&self) -> bool {
        self.target.is_some()
    }

    /// Begin a leg towards `target` lasting `secs`.
    pub fn depart(&mut self, target: Waypoint, secs: f64) {
        self.target = Some(target);
        self.remaining_secs = secs;
    }

    /// Burn `dt_secs` off the current leg; returns the waypoint reached, if
    /// the leg finished.
    pub fn advance(&mut self, dt_secs: f64) -> Option<Waypoint> {
        let target = self.target?;
        self.remaining_secs -= dt_secs;
        if self.remaining_secs > 0.0 {
            return None;
        }
        self.position = Some(target);
        self.target = None;
        self.remaining_secs = 0.0;
        Some(target)
    }

    /// Abandon the current leg; the mover stays where it departed from.
    pub fn halt(&mut self) {
        self.target = None;
        self.remaining_secs = 0.0;
    }
}

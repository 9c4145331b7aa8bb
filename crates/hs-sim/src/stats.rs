//! Run counters and per-step summaries.

use hs_core::Tick;

/// Running totals for one simulation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HospitalStats {
    /// Patients accepted by [`Hospital::admit`][crate::Hospital::admit].
    pub admitted:   u64,
    /// Admissions refused because the patient was misconfigured.
    pub rejected:   u64,
    /// Paid after a consultation without surgery.
    pub discharged: u64,
    /// Paid after surgery.
    pub operated:   u64,
    /// Ran out of patience.
    pub abandoned:  u64,
    /// Money drops handed to the world.
    pub payments:   u64,
    /// Reached an exit and were removed.
    pub exited:     u64,
}

impl HospitalStats {
    /// Patients inside the building.
    pub fn in_building(&self) -> u64 {
        self.admitted - self.exited
    }
}

/// Snapshot of the hospital at the end of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummary {
    pub tick:                 Tick,
    pub elapsed_secs:         f64,
    /// Patients still in the building after cleanup.
    pub active:               usize,
    pub desk_queue:           usize,
    pub waiting_room:         usize,
    pub free_seats:           usize,
    pub free_rooms:           usize,
    pub free_operating_rooms: usize,
    /// Whether the reception made an assignment this step.
    pub assigned:             bool,
    /// Patients removed this step.
    pub exited:               usize,
}

//! Plain data row types written by trace writers.

/// One patient state change.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub patient_id:   u32,
    pub from:         &'static str,
    pub to:           &'static str,
    pub patience:     f64,
}

/// The hospital at the end of one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:                 u64,
    pub elapsed_secs:         f64,
    pub active:               u64,
    pub desk_queue:           u64,
    pub waiting_room:         u64,
    pub free_seats:           u64,
    pub free_rooms:           u64,
    pub free_operating_rooms: u64,
    pub assigned:             bool,
    pub exited:               u64,
}

//! Hospital observer trait for progress reporting and data collection.

use hs_core::{PatientId, SimClock};
use hs_patient::PatientState;
use hs_reception::Assignment;

use crate::{HospitalStats, TickSummary};

/// A patient changed state during a step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    pub patient:  PatientId,
    pub from:     PatientState,
    pub to:       PatientState,
    /// Patience after the change.
    pub patience: f64,
}

/// Callbacks invoked by [`Hospital::advance`][crate::Hospital::advance] and
/// the drivers built on it.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: abandonment counter
///
/// ```rust,ignore
/// struct Walkouts(usize);
///
/// impl HospitalObserver for Walkouts {
///     fn on_transition(&mut self, _clock: &SimClock, t: &Transition) {
///         if t.to == PatientState::Abandoning {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait HospitalObserver {
    /// Called at the very start of each step, before any processing.
    fn on_tick_start(&mut self, _clock: &SimClock) {}

    /// Called for every state change, in the order they happen.
    fn on_transition(&mut self, _clock: &SimClock, _transition: &Transition) {}

    /// Called when the reception's grant has been accepted by the patient.
    fn on_assignment(&mut self, _clock: &SimClock, _assignment: &Assignment) {}

    /// Called at the end of each step, before the clock moves on.
    fn on_tick_end(&mut self, _clock: &SimClock, _summary: &TickSummary) {}

    /// Called once by [`Hospital::run`][crate::Hospital::run] after the last step.
    fn on_sim_end(&mut self, _clock: &SimClock, _stats: &HospitalStats) {}
}

/// A [`HospitalObserver`] that does nothing.
pub struct NoopObserver;

impl HospitalObserver for NoopObserver {}

//! The hosting environment the hospital reports into.

use hs_core::{PatientId, Waypoint};

/// Entity-level side effects the simulation cannot perform itself.
///
/// `destroy_entity` is only ever called after a step's patient passes have
/// finished, once per exited patient.
pub trait World {
    /// A treated patient left payment at `at`.
    fn spawn_money_drop(&mut self, patient: PatientId, at: Waypoint);

    /// The patient has left the building and its entity can go.
    fn destroy_entity(&mut self, patient: PatientId);
}

/// A [`World`] that ignores everything.
pub struct NullWorld;

impl World for NullWorld {
    fn spawn_money_drop(&mut self, _patient: PatientId, _at: Waypoint) {}
    fn destroy_entity(&mut self, _patient: PatientId) {}
}

/// A [`World`] that records every call, in order.
#[derive(Debug, Default, Clone)]
pub struct LedgerWorld {
    pub money_drops: Vec<(PatientId, Waypoint)>,
    pub destroyed:   Vec<PatientId>,
}

impl LedgerWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Money drops left by one patient.
    pub fn drops_by(&self, patient: PatientId) -> usize {
        self.money_drops.iter().filter(|(p, _)| *p == patient).count()
    }
}

impl World for LedgerWorld {
    fn spawn_money_drop(&mut self, patient: PatientId, at: Waypoint) {
        self.money_drops.push((patient, at));
    }

    fn destroy_entity(&mut self, patient: PatientId) {
        self.destroyed.push(patient);
    }
}

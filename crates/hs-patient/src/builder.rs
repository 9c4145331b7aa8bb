//! Validated construction of a [`PatientAgent`].
//!
//! Everything a patient needs to get through its visit (a mover, an exit) is
//! checked here, so a misconfigured patient is turned away at the door
//! instead of failing halfway through a tick.

use hs_core::{ExitId, HospitalConfig, PatientId};
use hs_mobility::Mover;

use crate::{PatientAgent, PatientError, PatientResult};

/// Fluent builder for [`PatientAgent<M>`].
///
/// # Example
///
/// ```rust,ignore
/// let patient = PatientBuilder::new()
///     .injured(true)
///     .mover(TimedMover::uniform(5.0)?)
///     .exit(ExitId(0))
///     .build(PatientId(0), &config)?;
/// ```
pub struct PatientBuilder<M: Mover> {
    injured:  bool,
    mover:    Option<M>,
    exit:     Option<ExitId>,
    patience: Option<f64>,
}

impl<M: Mover> Default for PatientBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mover> PatientBuilder<M> {
    pub fn new() -> Self {
        Self {
            injured:  false,
            mover:    None,
            exit:     None,
            patience: None,
        }
    }

    pub fn injured(mut self, injured: bool) -> Self {
        self.injured = injured;
        self
    }

    /// Required.
    pub fn mover(mut self, mover: M) -> Self {
        self.mover = Some(mover);
        self
    }

    /// Required.
    pub fn exit(mut self, exit: ExitId) -> Self {
        self.exit = Some(exit);
        self
    }

    /// Start with `patience` instead of `config.max_patience`.
    pub fn initial_patience(mut self, patience: f64) -> Self {
        self.patience = Some(patience);
        self
    }

    /// Validate against `config` and create the agent in `Arriving`.
    pub fn build(self, id: PatientId, config: &HospitalConfig) -> PatientResult<PatientAgent<M>> {
        config.validate()?;

        let mover = self.mover.ok_or(PatientError::MissingMover)?;
        let exit = self.exit.ok_or(PatientError::MissingExit)?;
        if exit.0 >= config.exits {
            return Err(PatientError::UnknownExit { exit, exits: config.exits });
        }

        let patience = self.patience.unwrap_or(config.max_patience);
        if !(patience.is_finite() && patience > 0.0) {
            return Err(PatientError::InvalidPatience(patience));
        }

        Ok(PatientAgent::new(
            id,
            self.injured,
            patience,
            config.patience_decay_per_sec,
            exit,
            mover,
        ))
    }
}

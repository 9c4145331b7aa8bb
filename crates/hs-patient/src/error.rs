use hs_core::{ExitId, HsError, PatientId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatientError {
    #[error("patient has no movement capability")]
    MissingMover,

    #[error("patient has no exit assigned")]
    MissingExit,

    #[error("exit {exit} does not exist (hospital has {exits})")]
    UnknownExit { exit: ExitId, exits: u8 },

    #[error("initial patience must be a positive finite number, got {0}")]
    InvalidPatience(f64),

    #[error("{patient}: cannot accept {event} while {state}")]
    InvalidTransition {
        patient: PatientId,
        event:   &'static str,
        state:   &'static str,
    },

    #[error(transparent)]
    Core(#[from] HsError),
}

pub type PatientResult<T> = Result<T, PatientError>;

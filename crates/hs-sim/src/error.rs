use hs_core::{HsError, PatientId};
use hs_patient::PatientError;
use hs_reception::ReceptionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] HsError),

    #[error("patient error: {0}")]
    Patient(#[from] PatientError),

    #[error("reception error: {0}")]
    Reception(#[from] ReceptionError),

    #[error("step length must be finite and non-negative, got {0}")]
    InvalidStep(f64),

    #[error("no operating room free for {0}")]
    NoOperatingRoomFree(PatientId),
}

pub type SimResult<T> = Result<T, SimError>;

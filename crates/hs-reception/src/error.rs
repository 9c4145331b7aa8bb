use hs_core::{PatientId, Resource};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceptionError {
    #[error("{0} does not exist")]
    UnknownResource(Resource),

    #[error("{resource} is already held by {holder}")]
    AlreadyHeld { resource: Resource, holder: PatientId },

    #[error("{0} is not held by anyone")]
    NotHeld(Resource),

    #[error("{0} is already registered at reception")]
    AlreadyRegistered(PatientId),

    #[error("{0} is neither at the desk nor in the waiting room")]
    NotRegistered(PatientId),

    #[error("{resource} was not the last grant to {patient}")]
    NotIssued { patient: PatientId, resource: Resource },
}

pub type ReceptionResult<T> = Result<T, ReceptionError>;

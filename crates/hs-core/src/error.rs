//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `HsError` as one variant
//! via `#[from]`, so configuration problems found in `hs-core` surface
//! unchanged at the top level.

use thiserror::Error;

use crate::PatientId;

/// The top-level error type for `hs-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HsError {
    #[error("patient {0} not found")]
    PatientNotFound(PatientId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `hs-*` crates.
pub type HsResult<T> = Result<T, HsError>;

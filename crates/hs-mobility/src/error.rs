use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("travel time for {leg} must be finite and non-negative, got {secs}")]
    InvalidTravelTime { leg: &'static str, secs: f64 },
}

pub type MobilityResult<T> = Result<T, MobilityError>;

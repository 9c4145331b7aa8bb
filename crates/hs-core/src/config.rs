//! Top-level hospital configuration.

use crate::{HsError, HsResult};

/// Top-level simulation configuration.
///
/// Typically built in code by the application or loaded from JSON/TOML with
/// the `serde` feature, then validated once by the hospital builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HospitalConfig {
    /// Patience every patient starts with.  Default: 100.
    pub max_patience: f64,

    /// Patience lost per simulated second while a patient waits or is being
    /// treated.  Default: 0.5.
    pub patience_decay_per_sec: f64,

    /// Step length used by the fixed-step drivers (`run`, `run_ticks`).
    pub tick_secs: f64,

    /// Steps simulated by `run`.
    pub total_ticks: u64,

    /// Number of chairs in the waiting room.  Zero is allowed: arrivals then
    /// go straight from the desk to a consultation room.
    pub waiting_seats: u16,

    /// Number of consultation rooms.  Zero is allowed (pure backpressure).
    pub consultation_rooms: u16,

    /// Number of operating rooms.
    pub operating_rooms: u16,

    /// Number of exits.  Every patient is admitted with one of them and the
    /// hospital must have at least one.
    pub exits: u8,

    /// Simulated seconds the receptionist is away from the desk after walking
    /// to the waiting room to call a patient.  `0.0` keeps it at its post.
    pub notify_walk_secs: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for HospitalConfig {
    fn default() -> Self {
        Self {
            max_patience:           100.0,
            patience_decay_per_sec: 0.5,
            tick_secs:              1.0,
            total_ticks:            3_600,
            waiting_seats:          8,
            consultation_rooms:     2,
            operating_rooms:        1,
            exits:                  1,
            notify_walk_secs:       0.0,
            seed:                   0,
        }
    }
}

impl HospitalConfig {
    /// Reject values that would make the simulation meaningless.
    pub fn validate(&self) -> HsResult<()> {
        if !(self.max_patience.is_finite() && self.max_patience > 0.0) {
            return Err(HsError::Config(format!(
                "max_patience must be a positive finite number, got {}",
                self.max_patience
            )));
        }
        if !(self.patience_decay_per_sec.is_finite() && self.patience_decay_per_sec >= 0.0) {
            return Err(HsError::Config(format!(
                "patience_decay_per_sec must be finite and non-negative, got {}",
                self.patience_decay_per_sec
            )));
        }
        if !(self.tick_secs.is_finite() && self.tick_secs > 0.0) {
            return Err(HsError::Config(format!(
                "tick_secs must be a positive finite number, got {}",
                self.tick_secs
            )));
        }
        if !(self.notify_walk_secs.is_finite() && self.notify_walk_secs >= 0.0) {
            return Err(HsError::Config(format!(
                "notify_walk_secs must be finite and non-negative, got {}",
                self.notify_walk_secs
            )));
        }
        if self.exits == 0 {
            return Err(HsError::Config("hospital has no exit".into()));
        }
        Ok(())
    }

    /// Simulated seconds until a fresh patient runs out of patience.
    ///
    /// `None` when patience never decays.
    pub fn patience_horizon_secs(&self) -> Option<f64> {
        (self.patience_decay_per_sec > 0.0)
            .then(|| self.max_patience / self.patience_decay_per_sec)
    }
}

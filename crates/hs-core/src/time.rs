//! Simulation time model.
//!
//! # Design
//!
//! Time advances in discrete steps driven by an external loop.  Each step
//! carries its own duration `dt` (seconds, `f64`), so a host that runs at a
//! variable frame rate can feed real frame times while tests use a fixed
//! step.  Two counters are kept:
//!
//!   current_tick  = number of completed steps (exact, integer)
//!   elapsed_secs  = sum of every step's `dt`
//!
//! The integer tick is the canonical ordering key for logs and output rows;
//! the float is what patience decay and travel times are measured against.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current step and total simulated seconds.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each step.
    pub current_tick: Tick,
    /// Simulated seconds since the start of the run.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current step, which lasted `dt_secs`.
    #[inline]
    pub fn advance(&mut self, dt_secs: f64) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt_secs;
    }

    /// Break elapsed time into (hour, minute, second) components.
    /// Useful for human-readable logging without a datetime library.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.elapsed_secs.max(0.0) as u64;
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({:02}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}

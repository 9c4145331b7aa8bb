//! Deterministic per-patient and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each patient gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (patient_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive patient IDs uniformly across the seed space.
//! A patient's random draws (diagnosis, treatment times) therefore do not
//! depend on how many other patients were admitted before it drew them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PatientId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── PatientRng ────────────────────────────────────────────────────────────────

/// Per-patient deterministic RNG.
pub struct PatientRng(SmallRng);

impl PatientRng {
    /// Seed deterministically from the run's global seed and a patient ID.
    pub fn new(global_seed: u64, patient: PatientId) -> Self {
        let seed = global_seed ^ (patient.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PatientRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global draws (arrival times, injuries at the
/// door).  Used only from the single-threaded driver.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Exponentially distributed gap with the given mean, by inversion.
    ///
    /// Used for Poisson arrival processes.  Returns `0.0` for a non-positive
    /// mean.
    pub fn exp_gap(&mut self, mean_secs: f64) -> f64 {
        if mean_secs <= 0.0 {
            return 0.0;
        }
        // gen::<f64>() is in [0, 1); 1 - u is in (0, 1] so ln never sees 0.
        let u: f64 = self.0.r#gen();
        -mean_secs * (1.0 - u).ln()
    }
}

//! Patient arrival schedules.
//!
//! # CSV format
//!
//! One row per arrival.  Rows need not be sorted.
//!
//! ```csv
//! at_secs,injured,exit
//! 0,false,0
//! 12.5,true,1
//! 40,false,0
//! ```

use std::collections::VecDeque;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use hs_core::{ExitId, HospitalConfig, HsError, SimRng};

use crate::SimResult;

/// One patient coming through the door.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrival {
    /// Simulated seconds since the start of the run.
    pub at_secs: f64,
    pub injured: bool,
    pub exit:    ExitId,
}

#[derive(Deserialize)]
struct ArrivalRecord {
    at_secs: f64,
    injured: bool,
    exit:    u8,
}

/// Time-ordered arrivals, consumed front to back as the clock advances.
#[derive(Debug, Default, Clone)]
pub struct ArrivalSchedule {
    pending: VecDeque<Arrival>,
}

impl ArrivalSchedule {
    /// Sort `arrivals` by time.  Equal times keep their given order.
    pub fn new(mut arrivals: Vec<Arrival>) -> Self {
        arrivals.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        Self { pending: arrivals.into() }
    }

    /// Load a schedule from a CSV file.
    pub fn load_csv(path: &Path) -> SimResult<Self> {
        let file = std::fs::File::open(path).map_err(HsError::Io)?;
        Self::load_reader(file)
    }

    /// Like [`load_csv`][Self::load_csv] but accepts any `Read` source.
    pub fn load_reader<R: Read>(reader: R) -> SimResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut arrivals = Vec::new();

        for (line, result) in csv_reader.deserialize::<ArrivalRecord>().enumerate() {
            let row = result.map_err(|e| HsError::Parse(e.to_string()))?;
            if !(row.at_secs.is_finite() && row.at_secs >= 0.0) {
                return Err(HsError::Parse(format!(
                    "row {}: at_secs must be finite and non-negative, got {}",
                    line + 1,
                    row.at_secs
                ))
                .into());
            }
            arrivals.push(Arrival {
                at_secs: row.at_secs,
                injured: row.injured,
                exit:    ExitId(row.exit),
            });
        }

        Ok(Self::new(arrivals))
    }

    /// Draw `count` arrivals as a Poisson process with the given mean gap.
    ///
    /// Each patient is injured with probability `injured_prob` and leaves by
    /// a uniformly chosen exit.  A mean gap of `0` puts everyone at the door
    /// at once.
    ///
    /// # Errors
    /// `HsError::Config` if `mean_gap_secs` is negative or not finite, or if
    /// `injured_prob` is not finite.
    pub fn generate(
        rng:           &mut SimRng,
        config:        &HospitalConfig,
        count:         usize,
        mean_gap_secs: f64,
        injured_prob:  f64,
    ) -> SimResult<Self> {
        if !(mean_gap_secs.is_finite() && mean_gap_secs >= 0.0) {
            return Err(HsError::Config(format!(
                "mean_gap_secs must be finite and non-negative, got {mean_gap_secs}"
            ))
            .into());
        }
        if !injured_prob.is_finite() {
            return Err(HsError::Config(format!(
                "injured_prob must be finite, got {injured_prob}"
            ))
            .into());
        }
        let exits = config.exits.max(1);
        let mut at_secs = 0.0;
        let arrivals = (0..count)
            .map(|_| {
                at_secs += rng.exp_gap(mean_gap_secs);
                Arrival {
                    at_secs,
                    injured: rng.gen_bool(injured_prob),
                    exit:    ExitId(rng.gen_range(0..exits)),
                }
            })
            .collect();
        Ok(Self::new(arrivals))
    }

    /// Remove and return every arrival due at or before `elapsed_secs`.
    pub fn due(&mut self, elapsed_secs: f64) -> Vec<Arrival> {
        let mut out = Vec::new();
        while let Some(next) = self.pending.front() {
            if next.at_secs > elapsed_secs {
                break;
            }
            if let Some(arrival) = self.pending.pop_front() {
                out.push(arrival);
            }
        }
        out
    }

    /// The next arrival, if any.
    pub fn peek(&self) -> Option<&Arrival> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

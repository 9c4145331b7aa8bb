//! `hs-output`: trace output for the hospital simulation.
//!
//! | Writer            | Files created                               |
//! |-------------------|---------------------------------------------|
//! | [`CsvTraceWriter`] | `transitions.csv`, `tick_summaries.csv`     |
//!
//! Writers implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `hs_sim::HospitalObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! hospital.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{TickSummaryRow, TransitionRow};
pub use writer::TraceWriter;

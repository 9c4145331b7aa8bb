//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `transitions.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TickSummaryRow, TransitionRow};

pub const TRANSITIONS_FILE: &str = "transitions.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes the trace to two CSV files.
pub struct CsvTraceWriter {
    transitions: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvTraceWriter {
    /// Create `dir` if needed, open (or truncate) both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut transitions = Writer::from_path(dir.join(TRANSITIONS_FILE))?;
        transitions.write_record(["tick", "elapsed_secs", "patient_id", "from", "to", "patience"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record([
            "tick",
            "elapsed_secs",
            "active",
            "desk_queue",
            "waiting_room",
            "free_seats",
            "free_rooms",
            "free_operating_rooms",
            "assigned",
            "exited",
        ])?;

        Ok(Self {
            transitions,
            summaries,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.patient_id.to_string(),
            row.from.to_owned(),
            row.to.to_owned(),
            format!("{:.3}", row.patience),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.active.to_string(),
            row.desk_queue.to_string(),
            row.waiting_room.to_string(),
            row.free_seats.to_string(),
            row.free_rooms.to_string(),
            row.free_operating_rooms.to_string(),
            (row.assigned as u8).to_string(),
            row.exited.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transitions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

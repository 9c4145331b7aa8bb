//! `TraceObserver<W>`: bridges `HospitalObserver` to a `TraceWriter`.

use log::warn;

use hs_core::SimClock;
use hs_sim::{HospitalObserver, HospitalStats, TickSummary, Transition};

use crate::row::{TickSummaryRow, TransitionRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`HospitalObserver`] that writes every transition and step summary to
/// a [`TraceWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer without waiting for `on_sim_end`.  Useful when the
    /// hospital is stepped by hand instead of through `run`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("trace output failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> HospitalObserver for TraceObserver<W> {
    fn on_transition(&mut self, clock: &SimClock, transition: &Transition) {
        let row = TransitionRow {
            tick:         clock.current_tick.0,
            elapsed_secs: clock.elapsed_secs,
            patient_id:   transition.patient.0,
            from:         transition.from.name(),
            to:           transition.to.name(),
            patience:     transition.patience,
        };
        let result = self.writer.write_transition(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, _clock: &SimClock, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:                 summary.tick.0,
            elapsed_secs:         summary.elapsed_secs,
            active:               summary.active as u64,
            desk_queue:           summary.desk_queue as u64,
            waiting_room:         summary.waiting_room as u64,
            free_seats:           summary.free_seats as u64,
            free_rooms:           summary.free_rooms as u64,
            free_operating_rooms: summary.free_operating_rooms as u64,
            assigned:             summary.assigned,
            exited:               summary.exited as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _clock: &SimClock, _stats: &HospitalStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

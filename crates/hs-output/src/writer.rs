//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, TickSummaryRow, TransitionRow};

/// Sink for trace rows.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with `take_error`, since observer callbacks cannot fail.
pub trait TraceWriter {
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

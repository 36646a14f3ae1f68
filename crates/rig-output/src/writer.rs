//! The `OutputWriter` trait implemented by trace writers.

use crate::{DaySummaryRow, OutputResult, WorkerSnapshotRow};

/// Sink for per-day trace output.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores the first one for retrieval after the run.
pub trait OutputWriter {
    /// Write one day summary row.
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()>;

    /// Write a batch of per-worker rows.
    fn write_snapshots(&mut self, rows: &[WorkerSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

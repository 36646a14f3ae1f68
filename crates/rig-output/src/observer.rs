//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rig_agent::Crew;
use rig_core::Day;
use rig_sim::SimObserver;

use crate::row::{DaySummaryRow, WorkerSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every day and per-worker rows
/// every `snapshot_interval` days.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    /// `0` disables worker snapshots.
    snapshot_interval: u32,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, snapshot_interval: u32) -> Self {
        Self { writer, snapshot_interval, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, day: Day, crew: &Crew) {
        let result = self.writer.write_day_summary(&DaySummaryRow::from_crew(day, crew));
        self.store_err(result);

        if self.snapshot_interval > 0 && day.0 % self.snapshot_interval == 0 {
            let rows: Vec<WorkerSnapshotRow> =
                crew.enumerate().map(|(id, w)| WorkerSnapshotRow::new(id, day, w)).collect();
            if !rows.is_empty() {
                let result = self.writer.write_snapshots(&rows);
                self.store_err(result);
            }
        }
    }

    fn on_sim_end(&mut self, _final_day: Day) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

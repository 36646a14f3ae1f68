//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `day_summaries.csv`
//! - `worker_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DaySummaryRow, OutputResult, WorkerSnapshotRow};

pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) both CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("day_summaries.csv"))?;
        summaries.write_record([
            "day",
            "susceptible",
            "exposed",
            "infectious",
            "recovered",
            "on_site",
            "on_site_infectious",
        ])?;

        let mut snapshots = Writer::from_path(dir.join("worker_snapshots.csv"))?;
        snapshots.write_record(["worker_id", "day", "on_site", "status"])?;

        Ok(Self { summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.day.to_string(),
            row.susceptible.to_string(),
            row.exposed.to_string(),
            row.infectious.to_string(),
            row.recovered.to_string(),
            row.on_site.to_string(),
            row.on_site_infectious.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[WorkerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.worker_id.to_string(),
                row.day.to_string(),
                (row.on_site as u8).to_string(),
                row.status.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}

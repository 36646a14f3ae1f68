//! `rig-output` — CSV writers for rig traces, case tables, and power sweeps.
//!
//! | Writer            | Files created                                  |
//! |-------------------|------------------------------------------------|
//! | [`CsvWriter`]     | `day_summaries.csv`, `worker_snapshots.csv`    |
//! | [`PowerCsvWriter`]| one file of `scenario…, days, reduction_factor, test_frequency, power` rows |
//! | [`write_case_table`] | one file of per-replicate case vectors     |
//!
//! Trace output is driven by [`SimOutputObserver`], which implements
//! `rig_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rig_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, 7);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod power;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use power::{write_case_table, PowerCsvWriter};
pub use row::{DaySummaryRow, WorkerSnapshotRow};
pub use writer::OutputWriter;

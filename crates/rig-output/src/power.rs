//! Tabular output for power sweeps and case tables.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use rig_power::{CaseTable, PowerRow};

use crate::{OutputError, OutputResult};

const POWER_COLUMNS: [&str; 4] = ["days", "reduction_factor", "test_frequency", "power"];

/// Writes [`PowerRow`]s prefixed by caller-defined scenario columns
/// (e.g. `crew_size,prevalence`), so several sweeps can share one file.
pub struct PowerCsvWriter {
    out:             Writer<File>,
    n_scenario_cols: usize,
}

impl PowerCsvWriter {
    pub fn new(path: &Path, scenario_columns: &[&str]) -> OutputResult<Self> {
        let mut out = Writer::from_path(path)?;
        out.write_record(scenario_columns.iter().chain(POWER_COLUMNS.iter()))?;
        Ok(Self { out, n_scenario_cols: scenario_columns.len() })
    }

    /// Append `rows`, each prefixed by the same `scenario` values.
    pub fn write_rows(&mut self, scenario: &[String], rows: &[PowerRow]) -> OutputResult<()> {
        if scenario.len() != self.n_scenario_cols {
            return Err(OutputError::Shape(format!(
                "expected {} scenario values, got {}",
                self.n_scenario_cols,
                scenario.len()
            )));
        }
        for row in rows {
            let record = scenario.iter().cloned().chain([
                row.n_days.to_string(),
                row.reduction_factor.to_string(),
                row.test_frequency.to_string(),
                row.power.to_string(),
            ]);
            self.out.write_record(record)?;
        }
        Ok(())
    }

    pub fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Write `table` as `replicate,arm,<case columns…>`, control rows first.
pub fn write_case_table(path: &Path, table: &CaseTable) -> OutputResult<()> {
    let mut out = Writer::from_path(path)?;
    out.write_record(
        ["replicate", "arm"]
            .into_iter()
            .map(str::to_owned)
            .chain(table.columns.iter().cloned()),
    )?;

    for (arm, rows) in [("control", &table.control), ("intervention", &table.intervention)] {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != table.columns.len() {
                return Err(OutputError::Shape(format!(
                    "{arm} replicate {i} has {} values for {} columns",
                    row.len(),
                    table.columns.len()
                )));
            }
            out.write_record(
                [i.to_string(), arm.to_owned()]
                    .into_iter()
                    .chain(row.iter().map(u32::to_string)),
            )?;
        }
    }
    out.flush()?;
    Ok(())
}

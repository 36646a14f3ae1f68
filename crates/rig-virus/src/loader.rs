//! Virus portfolio loaders.
//!
//! # CSV format
//!
//! One row per virus.  `t_pos` may be left empty, in which case it defaults
//! to `t_inf`.
//!
//! ```csv
//! name,r0,t_inf,t_rec,t_pos,total_prev,duration,peak
//! influenza,1.5,2,7,,0.1,120,60
//! rsv,1.3,4,12,5,0.05,150,80
//! ```
//!
//! # JSON format
//!
//! An array of objects with the same fields; `t_pos` may be omitted.
//!
//! ```json
//! [{"name": "influenza", "r0": 1.5, "t_inf": 2, "t_rec": 7,
//!   "total_prev": 0.1, "duration": 120, "peak": 60}]
//! ```
//!
//! Loading fails on the first malformed or invalid record, naming its line
//! (CSV) or position (JSON) and the offending field.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::{Virus, VirusError, VirusResult};

// ── Record ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VirusRecord {
    name:       String,
    r0:         f64,
    t_inf:      u32,
    t_rec:      u32,
    #[serde(default)]
    t_pos:      Option<u32>,
    total_prev: f64,
    duration:   f64,
    peak:       f64,
}

impl VirusRecord {
    fn into_virus(self) -> VirusResult<Virus> {
        Virus::new(
            self.name,
            self.r0,
            self.t_inf,
            self.t_rec,
            self.t_pos,
            self.total_prev,
            self.duration,
            self.peak,
        )
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a portfolio, choosing the format from the file extension
/// (`.json` → JSON, anything else → CSV).
pub fn load_viruses(path: &Path) -> VirusResult<Vec<Virus>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_viruses_json(path),
        _ => load_viruses_csv(path),
    }
}

/// Load a portfolio from a CSV file.
pub fn load_viruses_csv(path: &Path) -> VirusResult<Vec<Virus>> {
    let file = std::fs::File::open(path)?;
    load_viruses_csv_reader(file)
}

/// Like [`load_viruses_csv`] but accepts any `Read` source.
pub fn load_viruses_csv_reader<R: Read>(reader: R) -> VirusResult<Vec<Virus>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut viruses = Vec::new();

    for (i, result) in csv_reader.deserialize::<VirusRecord>().enumerate() {
        // Line 1 is the header.
        let line = i as u64 + 2;
        let record = result.map_err(|e| VirusError::Parse { line, message: e.to_string() })?;
        viruses.push(record.into_virus()?);
    }

    finish(viruses)
}

/// Load a portfolio from a JSON file.
pub fn load_viruses_json(path: &Path) -> VirusResult<Vec<Virus>> {
    let file = std::fs::File::open(path)?;
    load_viruses_json_reader(file)
}

/// Like [`load_viruses_json`] but accepts any `Read` source.
pub fn load_viruses_json_reader<R: Read>(reader: R) -> VirusResult<Vec<Virus>> {
    let records: Vec<VirusRecord> = serde_json::from_reader(reader)?;
    let viruses = records
        .into_iter()
        .map(VirusRecord::into_virus)
        .collect::<VirusResult<Vec<_>>>()?;
    finish(viruses)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn finish(viruses: Vec<Virus>) -> VirusResult<Vec<Virus>> {
    let mut seen = HashSet::new();
    for v in &viruses {
        if !seen.insert(v.name.as_str()) {
            return Err(VirusError::Invalid {
                name:   v.name.clone(),
                field:  "name",
                reason: "appears more than once".to_owned(),
            });
        }
    }
    debug!("loaded {} virus parameter sets", viruses.len());
    Ok(viruses)
}

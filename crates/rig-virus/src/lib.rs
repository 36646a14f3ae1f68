//! `rig-virus` — virus parameter sets and portfolio loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`virus`]   | `Virus` (validated, immutable parameter bundle)           |
//! | [`loader`]  | `load_viruses`, `load_viruses_csv`, `load_viruses_json`, `…_reader` |
//! | [`error`]   | `VirusError`, `VirusResult<T>`                            |
//!
//! Every record is validated on load, so a portfolio that loads cleanly can
//! be simulated without further checks.

pub mod error;
pub mod loader;
pub mod virus;


pub use error::{VirusError, VirusResult};
pub use loader::{
    load_viruses, load_viruses_csv, load_viruses_csv_reader, load_viruses_json,
    load_viruses_json_reader,
};
pub use virus::Virus;

//! Shared error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `RigError` via `From` impls or wrap `RigError` as one variant.

use thiserror::Error;

/// The top-level error type for `rig-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RigError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("domain error: {0}")]
    Domain(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rig-*` crates.
pub type RigResult<T> = Result<T, RigError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VirusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("virus file line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("virus JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("virus {name:?}: invalid {field}: {reason}")]
    Invalid {
        name:   String,
        field:  &'static str,
        reason: String,
    },
}

pub type VirusResult<T> = Result<T, VirusError>;

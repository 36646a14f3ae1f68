use rig_core::RigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExposureError {
    #[error("exposure configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Domain(#[from] RigError),
}

pub type ExposureResult<T> = Result<T, ExposureError>;

use rig_sim::SimError;
use rig_surveillance::SurveillanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerError {
    #[error("power configuration error: {0}")]
    Config(String),

    /// Too few or mismatched samples to form a meaningful estimate.
    #[error("cannot estimate power: {0}")]
    Statistics(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Surveillance(#[from] SurveillanceError),
}

pub type PowerResult<T> = Result<T, PowerError>;

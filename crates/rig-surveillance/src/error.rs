use rig_exposure::ExposureError;
use rig_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveillanceError {
    #[error("surveillance configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Exposure(#[from] ExposureError),
}

pub type SurveillanceResult<T> = Result<T, SurveillanceError>;

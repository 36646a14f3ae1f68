use rig_exposure::ExposureError;
use rig_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Exposure(#[from] ExposureError),
}

pub type SimResult<T> = Result<T, SimError>;

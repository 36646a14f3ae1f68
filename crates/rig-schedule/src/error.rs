use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid schedule: {0}")]
    Invalid(String),

    #[error("invalid crew: {0}")]
    Crew(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

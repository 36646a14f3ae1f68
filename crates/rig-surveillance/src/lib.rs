//! `rig-surveillance` — what periodic testing would see in a simulated run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`metrics`]  | `tests_positive`, `count_first_positive_tests`, `count_new_imported_cases` |
//! | [`cases`]    | `sim_cases`, `sim_multiple_viruses`, `case_columns`        |
//! | [`error`]    | `SurveillanceError`, `SurveillanceResult<T>`               |
//!
//! # Testing model
//!
//! Testing is instantaneous and perfect: a worker tests positive exactly when
//! on site and infectious (or, with a detection delay, on site and at least
//! `t_pos` days past exposure).  Rounds happen every `test_frequency` days
//! starting on day 0, and each worker counts once, in the round where they
//! first test positive (never for a positive already seen on day 0).

pub mod cases;
pub mod error;
pub mod metrics;


pub use cases::{case_columns, sim_cases, sim_multiple_viruses};
pub use error::{SurveillanceError, SurveillanceResult};
pub use metrics::{
    count_first_positive_tests, count_first_positive_tests_with, count_new_imported_cases,
    sampling_days, tests_positive, tests_positive_after, total_first_positive_tests,
};

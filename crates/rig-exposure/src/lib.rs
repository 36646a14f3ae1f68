//! `rig-exposure` — daily infection probabilities per shift.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`curve`]   | `MainlandCurve` trait, `GaussianWave`, `ConstantRate`, `StepRate`, `FnCurve` |
//! | [`model`]   | `ExposureModel`, `RateMap`                                  |
//! | [`error`]   | `ExposureError`, `ExposureResult<T>`                        |
//!
//! # Rates (summary)
//!
//! ```text
//! rate[Off] = mainland_curve(day)
//! rate[On]  = r0 · (infectious_on_site / on_site) / (t_rec − t_inf)
//! ```
//!
//! The on-site term is a discrete-time mean-field SEIR hazard.  A day with no
//! one on site has an on-site hazard of 0.  Both rates are clamped into
//! `[0, 1]` before they reach a Bernoulli draw; NaN is an error.

pub mod curve;
pub mod error;
pub mod model;


pub use curve::{ConstantRate, FnCurve, GaussianWave, MainlandCurve, StepRate};
pub use error::{ExposureError, ExposureResult};
pub use model::{ExposureModel, RateMap};

//! `rig-power` — how often would a surveillance program detect an
//! intervention?
//!
//! # Method
//!
//! For `n_sims` control and `n_sims` intervention replicates, take one
//! statistic per replicate (typically the total of first-positive tests) and:
//!
//! 1. `d_null = control − shuffle(control)`: differences under no effect.
//! 2. `d_alt  = control − intervention`: observed differences.
//! 3. threshold = the `1 − alpha` quantile of `d_null` (linear interpolation).
//! 4. power = fraction of `d_alt` strictly above the threshold.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`stats`]     | `quantile`, `null_differences`, `power`, `permutation_power` |
//! | [`replicate`] | `run_replicates` (sequential or Rayon)                   |
//! | [`estimator`] | `PowerConfig`, `PowerEstimator::sim_power`, `PowerRow`   |
//! | [`cases`]     | `CaseTable`, `case_table`, per-column power              |
//! | [`bootstrap`] | `sample_total`, `power_from_cases`, `thin_cases`         |
//! | [`error`]     | `PowerError`, `PowerResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Replicates run on Rayon's pool.                         |

pub mod bootstrap;
pub mod cases;
pub mod error;
pub mod estimator;
pub mod replicate;
pub mod stats;

#[cfg(test)]
mod tests;

pub use bootstrap::{power_from_cases, sample_total, thin_cases};
pub use cases::{case_table, CaseTable, ColumnPower};
pub use error::{PowerError, PowerResult};
pub use estimator::{PowerConfig, PowerEstimator, PowerRow};
pub use replicate::run_replicates;
pub use stats::{check_alpha, null_differences, permutation_power, power, quantile, MIN_REPLICATES};

//! `rig-sim` — day loop orchestrator for the rig surveillance simulator.
//!
//! # Daily step
//!
//! ```text
//! day 0: initial crew (staggered, all susceptible)
//! for day in 1..n_days:
//!   ① Rotate    — change_shift for every worker
//!   ② Progress  — update_infections for every worker (E → I → R)
//!   ③ Rates     — ExposureModel::rate_map on the rotated, progressed crew
//!   ④ Expose    — one Bernoulli draw per susceptible worker
//! ```
//!
//! Steps ①–③ are deterministic and run before the only stochastic step, so
//! same-day infection pressure reflects same-day on-site composition.  Each
//! step maps the previous crew to a new one; no worker is mutated in place.
//!
//! A run is strictly sequential.  Independent replicates parallelize at the
//! batch level (see `rig-power`), each owning its own `ReplicateRng`.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rig_core::{Day, ReplicateRng};
//! use rig_exposure::StepRate;
//! use rig_sim::{run_simulation, SimConfig};
//!
//! let config = SimConfig::default();
//! let curve = Arc::new(StepRate::until(0.05, Day(100)));
//! let result = run_simulation(&config, curve, ReplicateRng::from_seed(42))?;
//! assert_eq!(result.len(), 365);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod result;
pub mod sim;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use rig_core::ReplicateRng;
use rig_exposure::MainlandCurve;

pub use builder::SimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use result::SimulationResult;
pub use sim::Sim;

/// Build and run one replicate with default schedule and crew.
///
/// The schedule comes from `config.days_on`/`config.days_off` and the crew
/// from `initialize_crew`.  Returns all `config.n_days` snapshots.
pub fn run_simulation(
    config: &SimConfig,
    curve:  Arc<dyn MainlandCurve>,
    rng:    ReplicateRng,
) -> SimResult<SimulationResult> {
    SimBuilder::new(config.clone(), curve, rng)
        .build()?
        .run(&mut NoopObserver)
}

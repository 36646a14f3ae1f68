//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use rig_agent::Crew;
use rig_core::{Day, ReplicateRng};
use rig_exposure::{ExposureModel, MainlandCurve};
use rig_schedule::{initialize_crew, Schedule};

use crate::{Sim, SimConfig, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — horizon, crew size, disease and rotation parameters
/// - `Arc<dyn MainlandCurve>` — daily off-site infection probability
/// - [`ReplicateRng`] — the replicate's private random stream
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                            |
/// |----------------------|----------------------------------------------------|
/// | `.schedule(s)`       | `Schedule::rotating(days_on, days_off)`            |
/// | `.initial_crew(c)`   | `initialize_crew(crew_size, schedule, t_change)`   |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config, Arc::new(ConstantRate(0.01)), ReplicateRng::from_seed(7))
///     .schedule(Schedule::rotating(14, 21)?)
///     .build()?;
/// let result = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    curve:    Arc<dyn MainlandCurve>,
    rng:      ReplicateRng,
    schedule: Option<Schedule>,
    crew:     Option<Crew>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, curve: Arc<dyn MainlandCurve>, rng: ReplicateRng) -> Self {
        Self { config, curve, rng, schedule: None, crew: None }
    }

    /// Use an explicit schedule instead of one built from
    /// `days_on`/`days_off`.
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Start from an explicit day-0 crew instead of a freshly staggered one.
    ///
    /// Useful for tests that seed infections, or for warm-starting from a
    /// burn-in run's final snapshot.
    pub fn initial_crew(mut self, crew: Crew) -> Self {
        self.crew = Some(crew);
        self
    }

    /// Validate inputs, build the schedule, exposure model, and initial crew,
    /// and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let c = &self.config;

        let schedule = match self.schedule {
            Some(s) => {
                if c.t_change > s.shortest_shift() {
                    return Err(SimError::Config(format!(
                        "t_change ({}) must not exceed the shorter shift ({})",
                        c.t_change,
                        s.shortest_shift()
                    )));
                }
                s
            }
            None => Schedule::rotating(c.days_on, c.days_off)?,
        };

        let crew = match self.crew {
            Some(crew) => {
                if crew.is_empty() {
                    return Err(SimError::Config("initial crew is empty".to_owned()));
                }
                crew
            }
            None => initialize_crew(c.crew_size, &schedule, c.t_change)?,
        };

        let exposure = ExposureModel::new(self.curve, c.r0, c.t_inf, c.t_rec)?;

        Ok(Sim::new(self.config, schedule, exposure, self.rng, crew, Day::ZERO))
    }
}

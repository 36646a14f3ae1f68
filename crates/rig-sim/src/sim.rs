//! The `Sim` struct and its day loop.

use log::debug;
use rig_agent::{expose, update_infections, Crew, InfectionStatus, Shift};
use rig_core::{Day, ReplicateRng};
use rig_exposure::ExposureModel;
use rig_schedule::{change_shift, Schedule};

use crate::{SimConfig, SimObserver, SimResult, SimulationResult};

/// One simulation replicate.
///
/// Holds the current crew and everything needed to advance it.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated run parameters.
    pub config: SimConfig,

    /// Rotation schedule.  Deterministic; consulted by step ①.
    pub schedule: Schedule,

    /// On-site and mainland force of infection.  Consulted by step ③.
    pub exposure: ExposureModel,

    /// This replicate's private random stream.  Only step ④ draws from it.
    pub rng: ReplicateRng,

    crew: Crew,
    day:  Day,
}

impl Sim {
    pub(crate) fn new(
        config:   SimConfig,
        schedule: Schedule,
        exposure: ExposureModel,
        rng:      ReplicateRng,
        crew:     Crew,
        day:      Day,
    ) -> Self {
        Self { config, schedule, exposure, rng, crew, day }
    }

    /// Day of the current snapshot.
    pub fn day(&self) -> Day {
        self.day
    }

    /// The current snapshot.
    pub fn crew(&self) -> &Crew {
        &self.crew
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `config.n_days` snapshots exist and return all of them.
    ///
    /// The observer sees every snapshot, day 0 included, in order.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<SimulationResult> {
        let n_days = self.config.n_days as usize;
        let mut days = Vec::with_capacity(n_days);

        observer.on_day_end(self.day, &self.crew);
        days.push(self.crew.clone());

        while days.len() < n_days {
            self.step()?;
            observer.on_day_end(self.day, &self.crew);
            days.push(self.crew.clone());
        }
        observer.on_sim_end(self.day);

        debug!(
            "run finished at {}: {} infected ever, {} infectious on site",
            self.day,
            self.crew.len() - self.crew.count_status(InfectionStatus::Susceptible, None),
            self.crew.count_status(InfectionStatus::Infectious, Some(Shift::On)),
        );
        Ok(SimulationResult::new(days))
    }

    /// Advance the crew by exactly one day.
    pub fn step(&mut self) -> SimResult<()> {
        let day = self.day.next();
        let (t_inf, t_rec) = (self.config.t_inf, self.config.t_rec);

        // ① Rotate.
        let rotated = self.crew.map(|w| change_shift(w, day, &self.schedule));

        // ② Progress on the rotated crew.
        let progressed = rotated.map(|w| update_infections(w, day, t_inf, t_rec));

        // ③ Rates from the post-update composition.
        let rates = self.exposure.rate_map(&progressed, day)?;

        // ④ Exposure draws, in crew order.
        let rng = &mut self.rng;
        self.crew = progressed.map(|w| expose(w, day, &rates, rng));
        self.day = day;
        Ok(())
    }
}

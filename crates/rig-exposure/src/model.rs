//! The exposure model: crew state + day → per-shift infection probability.

use std::fmt;
use std::sync::Arc;

use log::trace;
use rig_agent::{Crew, InfectionStatus, Shift, ShiftMap};
use rig_core::{Day, Probability};

use crate::{ExposureError, ExposureResult, MainlandCurve};

/// Daily infection probability for each shift.
pub type RateMap = ShiftMap<Probability>;

/// Combines on-site transmission and mainland exposure.
#[derive(Clone)]
pub struct ExposureModel {
    curve: Arc<dyn MainlandCurve>,
    r0:    f64,
    /// Mean infectious period, `t_rec - t_inf`, in days.
    infectious_days: f64,
}

impl ExposureModel {
    /// Fails unless `r0` is finite and non-negative and `t_rec > t_inf`.
    pub fn new(
        curve: Arc<dyn MainlandCurve>,
        r0:    f64,
        t_inf: u32,
        t_rec: u32,
    ) -> ExposureResult<Self> {
        if !(r0.is_finite() && r0 >= 0.0) {
            return Err(ExposureError::Config(format!("r0 must be finite and >= 0, got {r0}")));
        }
        if t_rec <= t_inf {
            return Err(ExposureError::Config(format!(
                "t_rec ({t_rec}) must exceed t_inf ({t_inf})"
            )));
        }
        Ok(Self { curve, r0, infectious_days: f64::from(t_rec - t_inf) })
    }

    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Off-site probability on `day`, straight from the mainland curve.
    pub fn off_site_rate(&self, day: Day) -> ExposureResult<Probability> {
        Ok(Probability::clamped(self.curve.rate(day))?)
    }

    /// On-site probability given the current crew.
    ///
    /// An empty on-site cohort has no one to infect or be infected, so the
    /// hazard is 0 rather than a division by zero.
    pub fn on_site_rate(&self, crew: &Crew) -> ExposureResult<Probability> {
        let on_site = crew.count_shift(Shift::On);
        if on_site == 0 {
            return Ok(Probability::ZERO);
        }
        let infectious = crew.count_status(InfectionStatus::Infectious, Some(Shift::On));
        let prevalence = infectious as f64 / on_site as f64;
        Ok(Probability::clamped(self.r0 * prevalence / self.infectious_days)?)
    }

    /// Both rates for `day` given the post-rotation, post-progression crew.
    pub fn rate_map(&self, crew: &Crew, day: Day) -> ExposureResult<RateMap> {
        let rates = ShiftMap::new(self.on_site_rate(crew)?, self.off_site_rate(day)?);
        trace!("{day}: on-site rate {}, off-site rate {}", rates[Shift::On], rates[Shift::Off]);
        Ok(rates)
    }
}

impl fmt::Debug for ExposureModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExposureModel")
            .field("r0", &self.r0)
            .field("infectious_days", &self.infectious_days)
            .finish_non_exhaustive()
    }
}

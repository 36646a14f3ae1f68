//! Per-run simulation parameters.

use crate::{SimError, SimResult};

/// Parameters of one simulation replicate.
///
/// Typically built by the application from CLI flags or a virus record, then
/// passed to [`SimBuilder`][crate::SimBuilder] which calls
/// [`validate`](Self::validate).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of daily snapshots produced, including day 0.
    pub n_days: u32,

    /// ON-shift headcount.  The OFF shift is sized in proportion to its
    /// length (see `rig_schedule::initialize_crew`).
    pub crew_size: usize,

    /// Basic reproduction number on site.
    pub r0: f64,

    /// Incubation period: days from exposure to infectiousness.
    pub t_inf: u32,

    /// Total infection duration: days from exposure to recovery.
    pub t_rec: u32,

    pub days_on: u32,
    pub days_off: u32,

    /// Spacing in days between staggered rotation cohorts.
    pub t_change: u32,
}

impl Default for SimConfig {
    /// One year of a 120-person crew on a 28/28 rotation with weekly
    /// cohorts, for a virus with `R0 = 1.3`, 2-day incubation and 12-day
    /// total infection.
    fn default() -> Self {
        Self {
            n_days:    365,
            crew_size: 120,
            r0:        1.3,
            t_inf:     2,
            t_rec:     12,
            days_on:   28,
            days_off:  28,
            t_change:  7,
        }
    }
}

impl SimConfig {
    /// Check every input constraint, naming the first offending field.
    pub fn validate(&self) -> SimResult<()> {
        let fail = |msg: String| Err(SimError::Config(msg));

        if self.n_days == 0 {
            return fail("n_days must be > 0".to_owned());
        }
        if self.crew_size == 0 {
            return fail("crew_size must be > 0".to_owned());
        }
        if !(self.r0.is_finite() && self.r0 >= 0.0) {
            return fail(format!("r0 must be finite and >= 0, got {}", self.r0));
        }
        if self.t_rec <= self.t_inf {
            return fail(format!(
                "t_rec ({}) must exceed t_inf ({})",
                self.t_rec, self.t_inf
            ));
        }
        if self.days_on == 0 || self.days_off == 0 {
            return fail(format!(
                "days_on ({}) and days_off ({}) must both be > 0",
                self.days_on, self.days_off
            ));
        }
        if self.t_change == 0 {
            return fail("t_change must be > 0".to_owned());
        }
        if self.t_change > self.days_on.min(self.days_off) {
            return fail(format!(
                "t_change ({}) must not exceed the shorter shift ({})",
                self.t_change,
                self.days_on.min(self.days_off)
            ));
        }
        Ok(())
    }

    /// The same configuration with on-site transmission scaled by `factor`
    /// (an intervention that prevents `1 - factor` of transmissions).
    pub fn with_reduction(&self, factor: f64) -> SimConfig {
        SimConfig { r0: self.r0 * factor, ..self.clone() }
    }
}

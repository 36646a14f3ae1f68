//! Power sweeps over surveillance length and transmission reduction.

use std::sync::Arc;

use log::{info, warn};
use rig_core::SimRng;
use rig_exposure::MainlandCurve;
use rig_sim::{run_simulation, SimConfig};
use rig_surveillance::total_first_positive_tests;

use crate::replicate::run_replicates;
use crate::stats::{check_alpha, null_differences, power, MIN_REPLICATES};
use crate::{PowerError, PowerResult};

// ── PowerConfig ───────────────────────────────────────────────────────────────

/// Batch-level settings shared by every arm of a power estimate.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerConfig {
    /// Replicates per arm.
    pub n_sims: u32,
    /// One-sided false-positive rate.
    pub alpha: f64,
    /// Master seed; every replicate and permutation stream derives from it.
    pub seed: u64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self { n_sims: 1000, alpha: 0.05, seed: 0 }
    }
}

impl PowerConfig {
    pub fn validate(&self) -> PowerResult<()> {
        if (self.n_sims as usize) < MIN_REPLICATES {
            return Err(PowerError::Config(format!(
                "n_sims must be >= {MIN_REPLICATES}, got {}",
                self.n_sims
            )));
        }
        check_alpha(self.alpha)?;
        if f64::from(self.n_sims) * self.alpha < 1.0 {
            warn!(
                "n_sims ({}) * alpha ({}) < 1: the threshold is the sample maximum \
                 and power estimates will be noisy",
                self.n_sims, self.alpha
            );
        }
        Ok(())
    }
}

// ── PowerRow ──────────────────────────────────────────────────────────────────

/// One cell of a sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PowerRow {
    /// Surveillance window length.
    pub n_days: u32,
    pub reduction_factor: f64,
    pub test_frequency: u32,
    pub power: f64,
}

// ── PowerEstimator ────────────────────────────────────────────────────────────

/// Compares a control scenario against scaled-transmission interventions.
///
/// The control arm runs `base` unchanged; each intervention arm runs `base`
/// with `r0` multiplied by a reduction factor.  Both arms share the mainland
/// curve.
pub struct PowerEstimator {
    config: PowerConfig,
    base:   SimConfig,
    curve:  Arc<dyn MainlandCurve>,
}

impl PowerEstimator {
    pub fn new(
        config: PowerConfig,
        base:   SimConfig,
        curve:  Arc<dyn MainlandCurve>,
    ) -> PowerResult<Self> {
        config.validate()?;
        base.validate()?;
        Ok(Self { config, base, curve })
    }

    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    pub fn base(&self) -> &SimConfig {
        &self.base
    }

    /// Power for every `(n_days, reduction_factor)` pair.
    ///
    /// Each replicate runs once for `max(n_days)` days; shorter windows are
    /// evaluated on prefixes of the same trace.  The statistic is the total of
    /// first-positive tests at `test_frequency`.  One null distribution per
    /// window is shared by all reduction factors.  Rows come back window-major
    /// in the order given.
    pub fn sim_power(
        &self,
        n_days:            &[u32],
        reduction_factors: &[f64],
        test_frequency:    u32,
    ) -> PowerResult<Vec<PowerRow>> {
        let horizon = match n_days.iter().max() {
            Some(&h) if n_days.iter().all(|&d| d > 0) => h,
            _ => {
                return Err(PowerError::Config(
                    "n_days must be a non-empty list of positive lengths".to_owned(),
                ))
            }
        };
        check_reduction_factors(reduction_factors)?;
        if test_frequency == 0 {
            return Err(PowerError::Config("test_frequency must be > 0".to_owned()));
        }

        let run_config = SimConfig { n_days: horizon, ..self.base.clone() };
        let mut master = SimRng::new(self.config.seed);

        info!(
            "power sweep: {} replicates x {} arms, {} windows up to {horizon} days",
            self.config.n_sims,
            reduction_factors.len() + 1,
            n_days.len()
        );

        let control = self.window_totals(&run_config, n_days, test_frequency, master.next_seed())?;
        let mut arms = Vec::with_capacity(reduction_factors.len());
        for &factor in reduction_factors {
            info!("intervention arm: reduction factor {factor}");
            let config = run_config.with_reduction(factor);
            arms.push(self.window_totals(&config, n_days, test_frequency, master.next_seed())?);
        }

        let mut perm_rng = master.child(1);
        let mut rows = Vec::with_capacity(n_days.len() * reduction_factors.len());
        for (w, &nd) in n_days.iter().enumerate() {
            let control_w = column(&control, w);
            let d_null = null_differences(&control_w, &mut perm_rng);
            for (&factor, arm) in reduction_factors.iter().zip(&arms) {
                let d_alt: Vec<f64> = control_w
                    .iter()
                    .zip(column(arm, w))
                    .map(|(c, i)| c - i)
                    .collect();
                rows.push(PowerRow {
                    n_days: nd,
                    reduction_factor: factor,
                    test_frequency,
                    power: power(&d_null, &d_alt, self.config.alpha)?,
                });
            }
        }
        Ok(rows)
    }

    /// Total first positives per replicate (outer) and window (inner).
    fn window_totals(
        &self,
        config:         &SimConfig,
        n_days:         &[u32],
        test_frequency: u32,
        seed:           u64,
    ) -> PowerResult<Vec<Vec<u32>>> {
        run_replicates(self.config.n_sims, seed, |rng| {
            let result = run_simulation(config, Arc::clone(&self.curve), rng)?;
            n_days
                .iter()
                .map(|&nd| {
                    total_first_positive_tests(result.truncated(nd as usize), test_frequency)
                        .map_err(PowerError::from)
                })
                .collect()
        })
    }
}

pub(crate) fn check_reduction_factors(factors: &[f64]) -> PowerResult<()> {
    if factors.is_empty() {
        return Err(PowerError::Config("no reduction factors given".to_owned()));
    }
    if let Some(f) = factors.iter().find(|f| !(f.is_finite() && **f >= 0.0)) {
        return Err(PowerError::Config(format!(
            "reduction factors must be finite and >= 0, got {f}"
        )));
    }
    Ok(())
}

fn column(rows: &[Vec<u32>], j: usize) -> Vec<f64> {
    rows.iter().map(|r| f64::from(r[j])).collect()
}

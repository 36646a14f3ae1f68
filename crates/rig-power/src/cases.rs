//! Case tables: per-replicate case vectors for a control and an
//! intervention arm, with power per column.

use log::info;
use rig_core::SimRng;
use rig_sim::SimConfig;
use rig_surveillance::{case_columns, sim_multiple_viruses};
use rig_virus::Virus;

use crate::estimator::{check_reduction_factors, PowerConfig};
use crate::replicate::run_replicates;
use crate::stats::permutation_power;
use crate::{PowerError, PowerResult};

/// Case vectors for both arms, one row per replicate.
///
/// Column 0 is imported cases; column `k` is first-positive tests at the
/// `k`-th sampling frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseTable {
    pub columns:          Vec<String>,
    pub reduction_factor: f64,
    pub control:          Vec<Vec<u32>>,
    pub intervention:     Vec<Vec<u32>>,
}

/// Power of one case-table column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnPower {
    pub column: String,
    pub power:  f64,
}

impl CaseTable {
    pub fn n_replicates(&self) -> usize {
        self.control.len()
    }

    pub fn control_column(&self, j: usize) -> Vec<u32> {
        self.control.iter().map(|r| r[j]).collect()
    }

    pub fn intervention_column(&self, j: usize) -> Vec<u32> {
        self.intervention.iter().map(|r| r[j]).collect()
    }

    /// Permutation power of every column.
    pub fn powers(&self, alpha: f64, rng: &mut SimRng) -> PowerResult<Vec<ColumnPower>> {
        (0..self.columns.len())
            .map(|j| {
                Ok(ColumnPower {
                    column: self.columns[j].clone(),
                    power:  permutation_power(
                        &self.control_column(j),
                        &self.intervention_column(j),
                        alpha,
                        rng,
                    )?,
                })
            })
            .collect()
    }
}

/// Simulate `config.n_sims` replicates of the whole portfolio for each arm.
///
/// `base` supplies horizon, crew, and rotation.  The control arm uses each
/// virus's own `r0`; the intervention arm scales it by `reduction_factor`.
pub fn case_table(
    config:           &PowerConfig,
    base:             &SimConfig,
    viruses:          &[Virus],
    frequencies:      &[u32],
    reduction_factor: f64,
) -> PowerResult<CaseTable> {
    config.validate()?;
    base.validate()?;
    check_reduction_factors(&[reduction_factor])?;
    if viruses.is_empty() {
        return Err(PowerError::Config("virus portfolio is empty".to_owned()));
    }

    info!(
        "case table: {} viruses, {} replicates per arm, reduction factor {reduction_factor}",
        viruses.len(),
        config.n_sims
    );

    let mut master = SimRng::new(config.seed);
    let arm = |factor: f64, seed: u64| {
        run_replicates(config.n_sims, seed, |mut rng| {
            sim_multiple_viruses(viruses, base, frequencies, factor, &mut rng)
                .map_err(PowerError::from)
        })
    };
    let control = arm(1.0, master.next_seed())?;
    let intervention = arm(reduction_factor, master.next_seed())?;

    Ok(CaseTable {
        columns: case_columns(frequencies),
        reduction_factor,
        control,
        intervention,
    })
}

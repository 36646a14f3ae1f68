//! Whole-run case vectors for one virus or a portfolio.
//!
//! A case vector is `[imported, positives@f₁, positives@f₂, …]`: total
//! imported cases over the run, then total first-positive tests for each
//! sampling frequency in the order given.

use std::sync::Arc;

use log::debug;
use rig_core::ReplicateRng;
use rig_sim::{run_simulation, SimConfig};
use rig_virus::Virus;

use crate::metrics::{count_first_positive_tests_with, count_new_imported_cases, tests_positive_after};
use crate::{SurveillanceError, SurveillanceResult};

/// Column names of a case vector for `frequencies`.
pub fn case_columns(frequencies: &[u32]) -> Vec<String> {
    std::iter::once("imported".to_owned())
        .chain(frequencies.iter().map(|f| format!("positives_every_{f}d")))
        .collect()
}

/// Run one replicate for `virus` and return its case vector.
///
/// `base` supplies the horizon, crew, and rotation; the virus supplies
/// `r0` (scaled by `reduction_factor`), `t_inf`, `t_rec`, the detection delay
/// `t_pos`, and the mainland wave.
pub fn sim_cases(
    virus:            &Virus,
    base:             &SimConfig,
    frequencies:      &[u32],
    reduction_factor: f64,
    rng:              ReplicateRng,
) -> SurveillanceResult<Vec<u32>> {
    if frequencies.is_empty() {
        return Err(SurveillanceError::Config("no sampling frequencies given".to_owned()));
    }
    let config = SimConfig {
        r0:    virus.r0 * reduction_factor,
        t_inf: virus.t_inf,
        t_rec: virus.t_rec,
        ..base.clone()
    };
    let curve = Arc::new(virus.mainland_curve()?);
    let result = run_simulation(&config, curve, rng)?;
    let sim = result.snapshots();

    let mut cases = Vec::with_capacity(frequencies.len() + 1);
    cases.push(count_new_imported_cases(sim).iter().sum());
    for &f in frequencies {
        let firsts = count_first_positive_tests_with(sim, f, |w, day| {
            tests_positive_after(w, day, virus.t_inf, virus.t_pos)
        })?;
        cases.push(firsts.iter().sum());
    }
    debug!("{}: cases {cases:?} (reduction {reduction_factor})", virus.name);
    Ok(cases)
}

/// Run every virus in `viruses` independently and sum the case vectors
/// element-wise.
///
/// Models several pathogens circulating at once under one testing regimen.
/// Each virus gets its own stream derived from `rng`.
pub fn sim_multiple_viruses(
    viruses:          &[Virus],
    base:             &SimConfig,
    frequencies:      &[u32],
    reduction_factor: f64,
    rng:              &mut ReplicateRng,
) -> SurveillanceResult<Vec<u32>> {
    let mut total = vec![0u32; frequencies.len() + 1];
    for virus in viruses {
        let child = ReplicateRng::from_seed(rng.random());
        let cases = sim_cases(virus, base, frequencies, reduction_factor, child)?;
        for (t, c) in total.iter_mut().zip(cases) {
            *t += c;
        }
    }
    Ok(total)
}

//! Resampling helpers for scaling per-rig results up to fleets and years,
//! and for modelling missed tests.

use rand::distributions::Distribution;
use rand_distr::Binomial;
use rig_core::SimRng;

use crate::stats::permutation_power;
use crate::{PowerError, PowerResult};

/// `n_samples` bootstrap totals, each the sum of `n_rigs · n_years` draws
/// (with replacement) from `cases`.
///
/// Treats every per-replicate count as one rig-year.
pub fn sample_total(
    cases:     &[u32],
    n_rigs:    u32,
    n_years:   u32,
    n_samples: usize,
    rng:       &mut SimRng,
) -> PowerResult<Vec<u64>> {
    if cases.is_empty() {
        return Err(PowerError::Statistics("cannot resample an empty case list".to_owned()));
    }
    let draws = u64::from(n_rigs) * u64::from(n_years);
    Ok((0..n_samples)
        .map(|_| {
            (0..draws)
                .map(|_| u64::from(cases[rng.gen_range(0..cases.len())]))
                .sum()
        })
        .collect())
}

/// Permutation power on bootstrap totals of both arms.
pub fn power_from_cases(
    control:      &[u32],
    intervention: &[u32],
    n_rigs:       u32,
    n_years:      u32,
    n_samples:    usize,
    alpha:        f64,
    rng:          &mut SimRng,
) -> PowerResult<f64> {
    let as_f64 = |v: Vec<u64>| v.into_iter().map(|x| x as f64).collect::<Vec<f64>>();
    let control = as_f64(sample_total(control, n_rigs, n_years, n_samples, rng)?);
    let intervention = as_f64(sample_total(intervention, n_rigs, n_years, n_samples, rng)?);
    permutation_power(&control, &intervention, alpha, rng)
}

/// Keep each counted case independently with probability `1 − frac_missing`.
pub fn thin_cases(cases: &[u32], frac_missing: f64, rng: &mut SimRng) -> PowerResult<Vec<u32>> {
    if !(0.0..=1.0).contains(&frac_missing) {
        return Err(PowerError::Config(format!(
            "frac_missing must be in [0, 1], got {frac_missing}"
        )));
    }
    let keep = 1.0 - frac_missing;
    cases
        .iter()
        .map(|&n| {
            let dist = Binomial::new(u64::from(n), keep)
                .map_err(|e| PowerError::Config(format!("binomial({n}, {keep}): {e}")))?;
            Ok(dist.sample(rng.inner()) as u32)
        })
        .collect()
}

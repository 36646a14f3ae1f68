//! Permutation-test primitives.

use rig_core::SimRng;

use crate::{PowerError, PowerResult};

/// Fewest replicates per arm for which a permutation null is defined.
pub const MIN_REPLICATES: usize = 2;

/// `alpha` must lie strictly inside (0, 1).
pub fn check_alpha(alpha: f64) -> PowerResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(PowerError::Config(format!("alpha must be in (0, 1), got {alpha}")))
    }
}

/// The `q` quantile of `values`, interpolating linearly between order
/// statistics (position `q · (n − 1)` in the sorted sample).
pub fn quantile(values: &[f64], q: f64) -> PowerResult<f64> {
    if values.is_empty() {
        return Err(PowerError::Statistics("quantile of an empty sample".to_owned()));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(PowerError::Statistics(format!("quantile level must be in [0, 1], got {q}")));
    }
    if values.iter().any(|v| v.is_nan()) {
        return Err(PowerError::Statistics("sample contains NaN".to_owned()));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// `control − shuffle(control)`: the paired differences expected with no
/// effect.
pub fn null_differences(control: &[f64], rng: &mut SimRng) -> Vec<f64> {
    let mut permuted = control.to_vec();
    rng.shuffle(&mut permuted);
    control.iter().zip(&permuted).map(|(c, p)| c - p).collect()
}

/// Fraction of `d_alt` strictly above the `1 − alpha` quantile of `d_null`.
///
/// A difference exactly at the threshold does not count as a detection.
pub fn power(d_null: &[f64], d_alt: &[f64], alpha: f64) -> PowerResult<f64> {
    check_alpha(alpha)?;
    if d_alt.is_empty() {
        return Err(PowerError::Statistics("no alternative differences".to_owned()));
    }
    let threshold = quantile(d_null, 1.0 - alpha)?;
    let exceed = d_alt.iter().filter(|&&d| d > threshold).count();
    Ok(exceed as f64 / d_alt.len() as f64)
}

/// Permutation power for paired control / intervention statistics.
pub fn permutation_power<T>(
    control:      &[T],
    intervention: &[T],
    alpha:        f64,
    rng:          &mut SimRng,
) -> PowerResult<f64>
where
    T: Copy + Into<f64>,
{
    if control.len() != intervention.len() {
        return Err(PowerError::Statistics(format!(
            "control has {} replicates but intervention has {}",
            control.len(),
            intervention.len()
        )));
    }
    if control.len() < MIN_REPLICATES {
        return Err(PowerError::Statistics(format!(
            "need at least {MIN_REPLICATES} replicates, got {}",
            control.len()
        )));
    }

    let control: Vec<f64> = control.iter().map(|&c| c.into()).collect();
    let d_null = null_differences(&control, rng);
    let d_alt: Vec<f64> = control
        .iter()
        .zip(intervention)
        .map(|(&c, &i)| c - i.into())
        .collect();
    power(&d_null, &d_alt, alpha)
}

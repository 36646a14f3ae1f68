//! Unit tests for rig-power.

use std::sync::Arc;

use approx::assert_relative_eq;
use rig_core::SimRng;
use rig_exposure::{ConstantRate, MainlandCurve};
use rig_sim::SimConfig;
use rig_virus::Virus;

use crate::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn small_base() -> SimConfig {
    SimConfig { n_days: 120, crew_size: 40, r0: 1.5, ..SimConfig::default() }
}

fn curve() -> Arc<dyn MainlandCurve> {
    Arc::new(ConstantRate(0.01))
}

// ── Quantile ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod quantiles {
    use super::*;

    #[test]
    fn interpolates_between_order_statistics() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(quantile(&v, 0.0).unwrap(), 1.0);
        assert_relative_eq!(quantile(&v, 1.0).unwrap(), 4.0);
        assert_relative_eq!(quantile(&v, 0.5).unwrap(), 2.5);
        // pos = 0.95 * 3 = 2.85
        assert_relative_eq!(quantile(&v, 0.95).unwrap(), 3.85, epsilon = 1e-12);
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = quantile(&[5.0, -1.0, 3.0, 0.0, 2.0], 0.75).unwrap();
        let b = quantile(&[-1.0, 0.0, 2.0, 3.0, 5.0], 0.75).unwrap();
        assert_relative_eq!(a, b);
        assert_relative_eq!(a, 3.0);
    }

    #[test]
    fn single_value_is_every_quantile() {
        assert_relative_eq!(quantile(&[7.0], 0.3).unwrap(), 7.0);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(matches!(quantile(&[], 0.5), Err(PowerError::Statistics(_))));
        assert!(matches!(quantile(&[1.0], 1.5), Err(PowerError::Statistics(_))));
        assert!(matches!(quantile(&[1.0, f64::NAN], 0.5), Err(PowerError::Statistics(_))));
    }
}

// ── Power ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod power_stat {
    use super::*;

    #[test]
    fn ties_at_the_threshold_are_not_detections() {
        let d_null = [0.0; 10];
        assert_relative_eq!(power(&d_null, &[0.0, 0.0, 1.0, 2.0], 0.05).unwrap(), 0.5);
    }

    #[test]
    fn alpha_must_be_inside_unit_interval() {
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(matches!(power(&[0.0], &[1.0], alpha), Err(PowerError::Config(_))));
        }
    }

    #[test]
    fn clear_separation_has_full_power() {
        let control: Vec<u32> = (0..50).map(|i| 100 + i % 5).collect();
        let intervention: Vec<u32> = (0..50).map(|i| i % 5).collect();
        let p = permutation_power(&control, &intervention, 0.05, &mut SimRng::new(1)).unwrap();
        assert_relative_eq!(p, 1.0);
    }

    #[test]
    fn mismatched_or_tiny_samples_are_rejected() {
        let mut rng = SimRng::new(0);
        assert!(matches!(
            permutation_power(&[1u32, 2, 3], &[1u32, 2], 0.05, &mut rng),
            Err(PowerError::Statistics(_))
        ));
        assert!(matches!(
            permutation_power(&[1u32], &[0u32], 0.05, &mut rng),
            Err(PowerError::Statistics(_))
        ));
    }

    #[test]
    fn null_differences_sum_to_zero() {
        let control: Vec<f64> = (0..20).map(f64::from).collect();
        let d = null_differences(&control, &mut SimRng::new(4));
        assert_eq!(d.len(), 20);
        assert_relative_eq!(d.iter().sum::<f64>(), 0.0);
    }
}

// ── Replicates ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod replicates {
    use super::*;

    #[test]
    fn results_are_in_replicate_order_and_reproducible() {
        let draw = |mut rng: rig_core::ReplicateRng| Ok(rng.random::<u64>());
        let a = run_replicates(8, 42, draw).unwrap();
        let b = run_replicates(8, 42, draw).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);

        // Growing the batch leaves earlier replicates untouched.
        let c = run_replicates(12, 42, draw).unwrap();
        assert_eq!(&c[..8], &a[..]);
    }

    #[test]
    fn first_error_aborts_the_batch() {
        let r: PowerResult<Vec<u32>> =
            run_replicates(4, 0, |_| Err(PowerError::Config("boom".to_owned())));
        assert!(r.is_err());
    }
}

// ── Estimator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimator {
    use super::*;

    #[test]
    fn config_validation() {
        assert!(PowerConfig::default().validate().is_ok());
        assert!(PowerConfig { n_sims: 1, ..PowerConfig::default() }.validate().is_err());
        assert!(PowerConfig { alpha: 1.0, ..PowerConfig::default() }.validate().is_err());
        // Noisy but allowed.
        assert!(PowerConfig { n_sims: 10, ..PowerConfig::default() }.validate().is_ok());
    }

    #[test]
    fn rows_are_window_major() {
        let est = PowerEstimator::new(
            PowerConfig { n_sims: 20, seed: 1, ..PowerConfig::default() },
            small_base(),
            curve(),
        )
        .unwrap();
        let rows = est.sim_power(&[30, 60], &[0.5, 0.9], 7).unwrap();
        let keys: Vec<(u32, f64)> = rows.iter().map(|r| (r.n_days, r.reduction_factor)).collect();
        assert_eq!(keys, vec![(30, 0.5), (30, 0.9), (60, 0.5), (60, 0.9)]);
        assert!(rows.iter().all(|r| (0.0..=1.0).contains(&r.power) && r.test_frequency == 7));
    }

    #[test]
    fn same_seed_same_rows() {
        let make = || {
            PowerEstimator::new(
                PowerConfig { n_sims: 10, seed: 77, ..PowerConfig::default() },
                small_base(),
                curve(),
            )
            .unwrap()
        };
        assert_eq!(
            make().sim_power(&[60], &[0.5], 3).unwrap(),
            make().sim_power(&[60], &[0.5], 3).unwrap()
        );
    }

    #[test]
    fn bad_sweep_arguments_are_rejected() {
        let est = PowerEstimator::new(
            PowerConfig { n_sims: 4, ..PowerConfig::default() },
            small_base(),
            curve(),
        )
        .unwrap();
        assert!(est.sim_power(&[], &[0.5], 1).is_err());
        assert!(est.sim_power(&[0, 30], &[0.5], 1).is_err());
        assert!(est.sim_power(&[30], &[], 1).is_err());
        assert!(est.sim_power(&[30], &[f64::NAN], 1).is_err());
        assert!(est.sim_power(&[30], &[0.5], 0).is_err());
    }

    /// Stronger interventions are easier to detect, and halving transmission
    /// in a rig-driven outbreak is detected most of the time.
    #[test]
    fn power_is_monotone_in_reduction() {
        let base = SimConfig { n_days: 180, crew_size: 120, r0: 2.5, ..SimConfig::default() };
        let curve: Arc<dyn MainlandCurve> = Arc::new(ConstantRate(0.002));
        let est = PowerEstimator::new(
            PowerConfig { n_sims: 200, seed: 2024, ..PowerConfig::default() },
            base,
            curve,
        )
        .unwrap();
        let rows = est.sim_power(&[180], &[0.5, 0.9], 1).unwrap();
        assert!(rows[0].power > 0.5, "power(0.5) = {} is not clearly positive", rows[0].power);
        assert!(
            rows[0].power >= rows[1].power,
            "power(0.5) = {} < power(0.9) = {}",
            rows[0].power,
            rows[1].power
        );
    }

    /// With no real effect the detection rate stays near alpha, from both
    /// sides, averaged over independent seeds.
    #[test]
    fn null_scenario_is_calibrated() {
        let seeds = 1..=5u64;
        let n = seeds.clone().count() as f64;
        let mut total = 0.0;
        for seed in seeds {
            let est = PowerEstimator::new(
                PowerConfig { n_sims: 200, seed, ..PowerConfig::default() },
                small_base(),
                curve(),
            )
            .unwrap();
            let rows = est.sim_power(&[120], &[1.0], 1).unwrap();
            total += rows[0].power;
        }
        let mean = total / n;
        let alpha = PowerConfig::default().alpha;
        assert!(mean > alpha / 10.0, "null power {mean} collapsed below alpha {alpha}");
        assert!(mean < alpha * 2.5, "null power {mean} far above alpha {alpha}");
    }
}

// ── Case tables ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod case_tables {
    use super::*;

    fn flu() -> Virus {
        Virus::new("flu", 1.3, 2, 12, None, 0.3, 120.0, 60.0).unwrap()
    }

    #[test]
    fn table_shape_and_powers() {
        let config = PowerConfig { n_sims: 6, seed: 3, ..PowerConfig::default() };
        let table = case_table(&config, &small_base(), &[flu()], &[1, 3, 7], 0.5).unwrap();
        assert_eq!(table.columns.len(), 4);
        assert_eq!(table.n_replicates(), 6);
        assert!(table.control.iter().all(|r| r.len() == 4));
        assert!(table.intervention.iter().all(|r| r.len() == 4));

        let powers = table.powers(0.05, &mut SimRng::new(0)).unwrap();
        assert_eq!(powers.len(), 4);
        assert_eq!(powers[0].column, "imported");
    }

    #[test]
    fn empty_portfolio_is_rejected() {
        let config = PowerConfig { n_sims: 4, ..PowerConfig::default() };
        assert!(matches!(
            case_table(&config, &small_base(), &[], &[1], 0.5),
            Err(PowerError::Config(_))
        ));
    }
}

// ── Bootstrap and thinning ────────────────────────────────────────────────────

#[cfg(test)]
mod bootstrap {
    use super::*;

    #[test]
    fn totals_of_a_constant_sample() {
        let totals = sample_total(&[3, 3, 3], 4, 2, 5, &mut SimRng::new(0)).unwrap();
        assert_eq!(totals, vec![24; 5]);
    }

    #[test]
    fn empty_cases_cannot_be_resampled() {
        assert!(sample_total(&[], 1, 1, 5, &mut SimRng::new(0)).is_err());
    }

    #[test]
    fn separated_arms_have_full_bootstrap_power() {
        let p = power_from_cases(&[10, 12, 11], &[0, 1, 0], 5, 2, 200, 0.05, &mut SimRng::new(9))
            .unwrap();
        assert_relative_eq!(p, 1.0);
    }

    #[test]
    fn thinning_extremes() {
        let cases = [0, 5, 17, 40];
        let mut rng = SimRng::new(1);
        assert_eq!(thin_cases(&cases, 0.0, &mut rng).unwrap(), cases.to_vec());
        assert_eq!(thin_cases(&cases, 1.0, &mut rng).unwrap(), vec![0; 4]);
        assert!(thin_cases(&cases, 1.5, &mut rng).is_err());
    }

    #[test]
    fn thinning_never_adds_cases() {
        let cases: Vec<u32> = (0..100).collect();
        let thinned = thin_cases(&cases, 0.5, &mut SimRng::new(2)).unwrap();
        assert!(cases.iter().zip(&thinned).all(|(c, t)| t <= c));
        assert!(thinned.iter().sum::<u32>() < cases.iter().sum::<u32>());
    }
}

//! Integration tests for rig-sim.

use std::sync::Arc;

use rig_agent::{Crew, InfectionStatus, Shift, Worker};
use rig_core::{Day, ReplicateRng};
use rig_exposure::{ConstantRate, MainlandCurve, StepRate};
use rig_schedule::Schedule;

use crate::{run_simulation, NoopObserver, SimBuilder, SimConfig, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn small_config(n_days: u32) -> SimConfig {
    SimConfig { n_days, crew_size: 20, ..SimConfig::default() }
}

fn curve(rate: f64) -> Arc<dyn MainlandCurve> {
    Arc::new(ConstantRate(rate))
}

/// The reference offshore scenario: a 120-person 28/28 crew exposed at 5 %
/// per day ashore for the first 100 days.
fn reference_run(seed: u64) -> crate::SimulationResult {
    let config = SimConfig {
        n_days:    365,
        crew_size: 120,
        r0:        1.3,
        t_inf:     2,
        t_rec:     12,
        days_on:   28,
        days_off:  28,
        t_change:  7,
    };
    let curve: Arc<dyn MainlandCurve> = Arc::new(StepRate::until(0.05, Day(100)));
    run_simulation(&config, curve, ReplicateRng::from_seed(seed)).unwrap()
}

// ── SimConfig / SimBuilder validation ─────────────────────────────────────────

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn each_bad_field_is_rejected() {
        let bad = [
            SimConfig { n_days: 0, ..SimConfig::default() },
            SimConfig { crew_size: 0, ..SimConfig::default() },
            SimConfig { r0: -0.5, ..SimConfig::default() },
            SimConfig { r0: f64::NAN, ..SimConfig::default() },
            SimConfig { t_inf: 12, t_rec: 12, ..SimConfig::default() },
            SimConfig { days_on: 0, ..SimConfig::default() },
            SimConfig { days_off: 0, ..SimConfig::default() },
            SimConfig { t_change: 0, ..SimConfig::default() },
            SimConfig { t_change: 29, ..SimConfig::default() },
        ];
        for config in bad {
            assert!(
                matches!(config.validate(), Err(SimError::Config(_))),
                "accepted {config:?}"
            );
        }
    }

    #[test]
    fn error_names_the_field() {
        let err = SimConfig { t_inf: 5, t_rec: 3, ..SimConfig::default() }
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("t_rec"), "{err}");
    }

    #[test]
    fn explicit_schedule_must_fit_stagger() {
        let result = SimBuilder::new(SimConfig::default(), curve(0.0), ReplicateRng::from_seed(1))
            .schedule(Schedule::rotating(5, 28).unwrap())
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn empty_initial_crew_rejected() {
        let result = SimBuilder::new(SimConfig::default(), curve(0.0), ReplicateRng::from_seed(1))
            .initial_crew(Crew::default())
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn with_reduction_scales_r0_only() {
        let c = SimConfig::default().with_reduction(0.5);
        assert!((c.r0 - 0.65).abs() < 1e-12);
        assert_eq!(c.crew_size, SimConfig::default().crew_size);
    }
}

// ── Run invariants ────────────────────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    #[test]
    fn snapshot_count_and_crew_size_constant() {
        let result = run_simulation(&small_config(90), curve(0.02), ReplicateRng::from_seed(4)).unwrap();
        assert_eq!(result.len(), 90);
        let size = result.get(Day(0)).unwrap().len();
        assert_eq!(size, 40);
        assert!(result.snapshots().iter().all(|c| c.len() == size));
    }

    #[test]
    fn infection_status_never_regresses() {
        let result = run_simulation(&small_config(200), curve(0.03), ReplicateRng::from_seed(9)).unwrap();
        let days = result.snapshots();
        for pair in days.windows(2) {
            for (before, after) in pair[0].iter().zip(pair[1].iter()) {
                assert!(before.infection_status <= after.infection_status);
            }
        }
    }

    #[test]
    fn rotation_happens_exactly_at_shift_length() {
        let config = small_config(150);
        let result = run_simulation(&config, curve(0.0), ReplicateRng::from_seed(2)).unwrap();
        let schedule = Schedule::rotating(config.days_on, config.days_off).unwrap();
        for (i, pair) in result.snapshots().windows(2).enumerate() {
            let day = Day(i as u32 + 1);
            for (before, after) in pair[0].iter().zip(pair[1].iter()) {
                let due = day.days_since(before.shift_changed_on)
                    == i64::from(schedule[before.shift].length);
                if due {
                    assert_eq!(after.shift, before.shift.opposite());
                    assert_eq!(after.shift_changed_on, day);
                } else {
                    assert_eq!(after.shift, before.shift);
                    assert_eq!(after.shift_changed_on, before.shift_changed_on);
                }
            }
        }
    }

    #[test]
    fn no_mainland_exposure_means_no_infection() {
        let result = run_simulation(&small_config(120), curve(0.0), ReplicateRng::from_seed(3)).unwrap();
        let last = result.last().unwrap();
        assert_eq!(last.count_status(InfectionStatus::Susceptible, None), last.len());
    }

    #[test]
    fn same_seed_same_trace() {
        let a = run_simulation(&small_config(60), curve(0.05), ReplicateRng::from_seed(77)).unwrap();
        let b = run_simulation(&small_config(60), curve(0.05), ReplicateRng::from_seed(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn truncated_is_a_prefix() {
        let r = run_simulation(&small_config(30), curve(0.05), ReplicateRng::from_seed(5)).unwrap();
        assert_eq!(r.truncated(10), &r.snapshots()[..10]);
        assert_eq!(r.truncated(1_000).len(), 30);
    }
}

// ── Step ordering ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn exposure_sees_same_day_progression() {
        // Worker 0 was exposed on day 0 and turns infectious on day 1 (t_inf = 1).
        // With r0 = 2, one infectious of two on site, and a 1-day infectious
        // period, the on-site rate on day 1 is exactly 1, so worker 1 must be
        // exposed on day 1 — but only if rates are computed after progression.
        let config = SimConfig {
            n_days: 2, crew_size: 2, r0: 2.0, t_inf: 1, t_rec: 2,
            days_on: 50, days_off: 50, t_change: 7,
        };
        let crew = Crew::new(vec![
            Worker::new(Shift::On, Day::ZERO).with_status(InfectionStatus::Exposed, Day::ZERO),
            Worker::new(Shift::On, Day::ZERO),
        ]);
        let result = SimBuilder::new(config, curve(0.0), ReplicateRng::from_seed(8))
            .initial_crew(crew)
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        let day1 = result.get(Day(1)).unwrap();
        assert_eq!(day1.workers()[0].infection_status, InfectionStatus::Infectious);
        assert_eq!(day1.workers()[1].infection_status, InfectionStatus::Exposed);
        assert_eq!(day1.workers()[1].infection_status_changed_on, Day(1));
    }

    #[test]
    fn seeded_outbreak_spreads_on_site() {
        let config = SimConfig {
            n_days: 40, crew_size: 30, r0: 6.0, t_inf: 1, t_rec: 6,
            days_on: 60, days_off: 60, t_change: 7,
        };
        let mut workers: Vec<Worker> = (0..30).map(|_| Worker::new(Shift::On, Day::ZERO)).collect();
        for w in workers.iter_mut().take(3) {
            *w = w.with_status(InfectionStatus::Infectious, Day::ZERO);
        }
        let result = SimBuilder::new(config, curve(0.0), ReplicateRng::from_seed(12))
            .initial_crew(Crew::new(workers))
            .build()
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        let last = result.last().unwrap();
        assert!(last.count_status(InfectionStatus::Recovered, None) > 3);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        days:  Vec<u32>,
        ended: Option<Day>,
    }

    impl SimObserver for Recorder {
        fn on_day_end(&mut self, day: Day, _crew: &Crew) {
            self.days.push(day.0);
        }
        fn on_sim_end(&mut self, final_day: Day) {
            self.ended = Some(final_day);
        }
    }

    #[test]
    fn observer_sees_every_snapshot() {
        let mut rec = Recorder::default();
        let sim = SimBuilder::new(small_config(15), curve(0.01), ReplicateRng::from_seed(1))
            .build()
            .unwrap();
        let result = sim.run(&mut rec).unwrap();
        assert_eq!(rec.days, (0..15).collect::<Vec<_>>());
        assert_eq!(rec.ended, Some(Day(14)));
        assert_eq!(result.len(), 15);
    }

    #[test]
    fn single_day_run_is_initial_crew() {
        let sim = SimBuilder::new(small_config(1), curve(1.0), ReplicateRng::from_seed(1))
            .build()
            .unwrap();
        let initial = sim.crew().clone();
        let result = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(Day(0)), Some(&initial));
    }
}

// ── Reference scenario ────────────────────────────────────────────────────────

#[cfg(test)]
mod reference {
    use super::*;

    #[test]
    fn shape_of_reference_run() {
        let result = reference_run(2024);
        assert_eq!(result.len(), 365);
        for crew in result.snapshots() {
            assert_eq!(crew.len(), 240);
            assert_eq!(crew.count_shift(Shift::On), 120);
        }
    }

    #[test]
    fn infectious_only_after_incubation() {
        let result = reference_run(7);
        let first_exposure = result
            .iter()
            .find(|(_, c)| c.count_status(InfectionStatus::Exposed, None) > 0)
            .map(|(d, _)| d)
            .expect("5 % daily mainland exposure infects someone");
        let first_infectious = result
            .iter()
            .find(|(_, c)| c.count_status(InfectionStatus::Infectious, None) > 0)
            .map(|(d, _)| d)
            .expect("exposed workers progress");
        assert!(first_infectious.days_since(first_exposure) >= 2);
    }
}

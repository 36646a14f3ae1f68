//! Testing outcomes computed from a trace.
//!
//! All functions borrow a slice of daily crew snapshots, day 0 first — a
//! whole `SimulationResult::snapshots()` or a `truncated` prefix of one.

use rig_agent::{Crew, InfectionStatus, Shift, Worker};
use rig_core::Day;

use crate::{SurveillanceError, SurveillanceResult};

/// On site and infectious.
#[inline]
pub fn tests_positive(worker: &Worker) -> bool {
    worker.is_on_site() && worker.is_infectious()
}

/// On site and at least `t_pos` days past exposure on `day`.
///
/// The exposure day is recovered from the status change: an exposed worker
/// was exposed on `infection_status_changed_on`, an infectious one `t_inf`
/// days before it.  With `t_pos == t_inf` this agrees with
/// [`tests_positive`] on every snapshot the simulator produces.
pub fn tests_positive_after(worker: &Worker, day: Day, t_inf: u32, t_pos: u32) -> bool {
    if !worker.is_on_site() {
        return false;
    }
    let exposed_on = i64::from(worker.infection_status_changed_on.0)
        - match worker.infection_status {
            InfectionStatus::Exposed => 0,
            InfectionStatus::Infectious => i64::from(t_inf),
            InfectionStatus::Susceptible | InfectionStatus::Recovered => return false,
        };
    i64::from(day.0) - exposed_on >= i64::from(t_pos)
}

/// Days tested: `0, f, 2f, …` below `n_days`.
pub fn sampling_days(n_days: usize, test_frequency: u32) -> impl Iterator<Item = Day> {
    (0..n_days as u32).step_by(test_frequency.max(1) as usize).map(Day)
}

/// First detections per testing interval.
///
/// For each pair of consecutive testing days `(a, b)`, counts workers that
/// test positive on `b`, did not on `a`, and have not tested positive on any
/// earlier testing day.  A worker who rotates off while positive and returns
/// still positive is not counted again; recovery is permanent, so each worker
/// is detected at most once.  The result has one entry per interval (one
/// fewer than the number of testing days).
pub fn count_first_positive_tests(sim: &[Crew], test_frequency: u32) -> SurveillanceResult<Vec<u32>> {
    count_first_positive_tests_with(sim, test_frequency, |w, _| tests_positive(w))
}

/// [`count_first_positive_tests`] with a custom positivity rule.
pub fn count_first_positive_tests_with<F>(
    sim:            &[Crew],
    test_frequency: u32,
    positive:       F,
) -> SurveillanceResult<Vec<u32>>
where
    F: Fn(&Worker, Day) -> bool,
{
    if test_frequency == 0 {
        return Err(SurveillanceError::Config("test_frequency must be > 0".to_owned()));
    }
    let mut days = sampling_days(sim.len(), test_frequency);
    let Some(first) = days.next() else {
        return Ok(Vec::new());
    };

    // Positive on any testing day so far.  Covers the previous round, so a
    // worker still positive from `a` is never new on `b`.
    let mut detected: Vec<bool> = sim[first.index()].iter().map(|w| positive(w, first)).collect();

    let counts = days
        .map(|day| {
            let mut count = 0;
            for (i, w) in sim[day.index()].iter().enumerate() {
                if positive(w, day) && !detected[i] {
                    count += 1;
                    detected[i] = true;
                }
            }
            count
        })
        .collect();
    Ok(counts)
}

/// Sum of [`count_first_positive_tests`] over the whole trace.
pub fn total_first_positive_tests(sim: &[Crew], test_frequency: u32) -> SurveillanceResult<u32> {
    Ok(count_first_positive_tests(sim, test_frequency)?.iter().sum())
}

/// Imported cases per day.
///
/// A worker is imported on day `d` when they were off site on `d - 1`, are
/// on site on `d`, and were already exposed or infectious on `d - 1`.
/// Infections drawn on site on the arrival day are on-site cases.  Day 0 has
/// no predecessor and counts 0.  One entry per snapshot.
pub fn count_new_imported_cases(sim: &[Crew]) -> Vec<u32> {
    let imports = sim.windows(2).map(|pair| {
        pair[0]
            .iter()
            .zip(pair[1].iter())
            .filter(|(before, after)| {
                before.shift == Shift::Off
                    && after.shift == Shift::On
                    && before.infection_status.is_infected()
            })
            .count() as u32
    });
    sim.first().map(|_| 0).into_iter().chain(imports).collect()
}

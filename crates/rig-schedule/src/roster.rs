//! Staggered crew initialization.
//!
//! # Allocation
//!
//! `crew_size` is the number of workers the ON shift is sized for.  Each
//! shift receives
//!
//! ```text
//! crew_size * schedule[shift].length / schedule[On].length
//! ```
//!
//! workers (integer division), so a 28/28 rotation with `crew_size = 120`
//! yields 120 workers on site and 120 ashore.  With unequal shift lengths the
//! total is only approximately proportional; the ON length stays the
//! reference denominator so staggering remains period-aligned.
//!
//! # Staggering
//!
//! Within a shift, workers cycle through `shift_changed_on` offsets
//! `0, t_change, 2·t_change, …` below the shift length.  Cohorts therefore
//! rotate `t_change` days apart instead of all on the same day, which would
//! otherwise synchronize on-site prevalence with test timing.

use log::debug;
use rig_agent::{Crew, Shift, Worker};
use rig_core::Day;

use crate::{Schedule, ScheduleError, ScheduleResult};

/// Number of workers [`initialize_crew`] allocates to `shift`.
pub fn shift_headcount(crew_size: usize, schedule: &Schedule, shift: Shift) -> usize {
    crew_size * schedule.length(shift) as usize / schedule.length(Shift::On) as usize
}

/// Total number of workers [`initialize_crew`] allocates across both shifts.
pub fn allocated_crew_size(crew_size: usize, schedule: &Schedule) -> usize {
    Shift::ALL
        .iter()
        .map(|&s| shift_headcount(crew_size, schedule, s))
        .sum()
}

/// Build the day-0 crew: all workers susceptible, ON workers first, with
/// staggered `shift_changed_on` offsets.
///
/// Fails if `crew_size` or `t_change` is zero.
pub fn initialize_crew(crew_size: usize, schedule: &Schedule, t_change: u32) -> ScheduleResult<Crew> {
    if crew_size == 0 {
        return Err(ScheduleError::Crew("crew_size must be > 0".to_owned()));
    }
    if t_change == 0 {
        return Err(ScheduleError::Crew("t_change must be > 0".to_owned()));
    }

    let crew: Crew = Shift::ALL
        .iter()
        .flat_map(|&shift| generate_shift(shift, crew_size, schedule, t_change))
        .collect();

    debug!(
        "initialized crew of {} ({} on, {} off) with stagger {} days",
        crew.len(),
        crew.count_shift(Shift::On),
        crew.count_shift(Shift::Off),
        t_change,
    );
    Ok(crew)
}

fn generate_shift(
    shift:     Shift,
    crew_size: usize,
    schedule:  &Schedule,
    t_change:  u32,
) -> impl Iterator<Item = Worker> {
    let offsets: Vec<u32> = (0..schedule.length(shift)).step_by(t_change as usize).collect();
    offsets
        .into_iter()
        .cycle()
        .take(shift_headcount(crew_size, schedule, shift))
        .map(move |d| Worker::new(shift, Day(d)))
}

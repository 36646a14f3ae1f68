//! Pure daily infection transitions.
//!
//! Both functions take a worker by value and return the next state; neither
//! touches anything else.  Shift rotation is in `rig_schedule::change_shift`.

use rig_core::{Day, Probability, ReplicateRng};

use crate::{InfectionStatus, ShiftMap, Worker};

/// Advance the disease clock by one day.
///
/// - `Exposed` for at least `t_inf` days → `Infectious`.
/// - `Infectious` for at least `t_rec - t_inf` days → `Recovered`.
///
/// `Susceptible` and `Recovered` are fixed points.  Requires `t_rec > t_inf`
/// (validated by `SimConfig`).
pub fn update_infections(worker: Worker, day: Day, t_inf: u32, t_rec: u32) -> Worker {
    let elapsed = worker.days_in_status(day);
    match worker.infection_status {
        InfectionStatus::Exposed if elapsed >= i64::from(t_inf) => {
            worker.with_status(InfectionStatus::Infectious, day)
        }
        InfectionStatus::Infectious if elapsed >= i64::from(t_rec) - i64::from(t_inf) => {
            worker.with_status(InfectionStatus::Recovered, day)
        }
        _ => worker,
    }
}

/// Draw one day's exposure for a susceptible worker.
///
/// A susceptible worker becomes `Exposed` on `day` with probability
/// `rates[worker.shift]`.  Workers in any other status are returned
/// unchanged and consume no randomness.
pub fn expose(
    worker: Worker,
    day:    Day,
    rates:  &ShiftMap<Probability>,
    rng:    &mut ReplicateRng,
) -> Worker {
    if worker.infection_status != InfectionStatus::Susceptible {
        return worker;
    }
    if rng.bernoulli(rates[worker.shift]) {
        worker.with_status(InfectionStatus::Exposed, day)
    } else {
        worker
    }
}

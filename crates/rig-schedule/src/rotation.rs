//! Deterministic shift rotation.

use rig_agent::Worker;
use rig_core::Day;

use crate::Schedule;

/// Rotate `worker` if its current shift has run its full length by `day`.
///
/// Returns the worker on `schedule[shift].next_shift` with
/// `shift_changed_on = day` when `day - shift_changed_on >= length`,
/// otherwise the worker unchanged.  Infection fields are never touched.
pub fn change_shift(worker: Worker, day: Day, schedule: &Schedule) -> Worker {
    let entry = schedule[worker.shift];
    if day.days_since(worker.shift_changed_on) >= i64::from(entry.length) {
        worker.with_shift(entry.next_shift, day)
    } else {
        worker
    }
}

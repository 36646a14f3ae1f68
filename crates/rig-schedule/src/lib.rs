//! `rig-schedule` — rotation schedules and crew rostering.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`schedule`]  | `ScheduleEntry`, `Schedule` (ON ↔ OFF 2-cycle)            |
//! | [`rotation`]  | `change_shift`                                            |
//! | [`roster`]    | `initialize_crew`, `allocated_crew_size`, `shift_headcount` |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Rotation model (summary)
//!
//! A worker on shift `s` rotates on the first day `d` with
//!
//! ```text
//! d - shift_changed_on >= schedule[s].length
//! ```
//!
//! moving to `schedule[s].next_shift` with `shift_changed_on = d`.  Rotation
//! is fully deterministic; staggering comes only from the initial
//! `shift_changed_on` offsets assigned by [`initialize_crew`].

pub mod error;
pub mod roster;
pub mod rotation;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use roster::{allocated_crew_size, initialize_crew, shift_headcount};
pub use rotation::change_shift;
pub use schedule::{Schedule, ScheduleEntry};

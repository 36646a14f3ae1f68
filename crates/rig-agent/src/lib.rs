//! `rig-agent` — worker state and its daily transitions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`shift`]       | `Shift`, `ShiftMap<T>` (array keyed by shift)             |
//! | [`worker`]      | `InfectionStatus`, `Worker`                               |
//! | [`transition`]  | `update_infections`, `expose`                             |
//! | [`crew`]        | `Crew`, `CrewSummary`                                     |
//!
//! Shift rotation needs the schedule and lives in `rig-schedule`.
//!
//! # Value semantics
//!
//! `Worker` is a small `Copy` value.  Every transition takes a worker by value
//! and returns the next one; the simulation builds each day's crew as a fresh
//! `Vec` from the previous day's, so no worker is ever read and written within
//! the same pass.

pub mod crew;
pub mod shift;
pub mod transition;
pub mod worker;


pub use crew::{Crew, CrewSummary};
pub use shift::{Shift, ShiftMap};
pub use transition::{expose, update_infections};
pub use worker::{InfectionStatus, Worker};

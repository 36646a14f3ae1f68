//! `rig-core` — foundational types for the rig surveillance simulator.
//!
//! This crate is a dependency of every other `rig-*` crate.  It has no
//! `rig-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | [`ids`]           | `WorkerId`, `ReplicateId`                           |
//! | [`day`]           | `Day`                                               |
//! | [`probability`]   | `Probability` (validated `[0, 1]` value)            |
//! | [`rng`]           | `ReplicateRng` (per-replicate), `SimRng` (master)   |
//! | [`error`]         | `RigError`, `RigResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod day;
pub mod error;
pub mod ids;
pub mod probability;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use day::Day;
pub use error::{RigError, RigResult};
pub use ids::{ReplicateId, WorkerId};
pub use probability::Probability;
pub use rng::{ReplicateRng, SimRng};

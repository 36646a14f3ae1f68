//! The `Worker` agent and its infection status.

use std::fmt;

use rig_core::Day;

use crate::Shift;

/// SEIR stage of one worker.
///
/// The derived ordering follows the only permitted direction of travel,
/// `Susceptible < Exposed < Infectious < Recovered`.  A worker's status over
/// a run is non-decreasing in this order; there is no waning immunity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionStatus {
    Susceptible,
    Exposed,
    Infectious,
    Recovered,
}

impl InfectionStatus {
    pub const ALL: [InfectionStatus; 4] = [
        InfectionStatus::Susceptible,
        InfectionStatus::Exposed,
        InfectionStatus::Infectious,
        InfectionStatus::Recovered,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Carrying the virus (exposed or infectious).
    #[inline]
    pub fn is_infected(self) -> bool {
        matches!(self, InfectionStatus::Exposed | InfectionStatus::Infectious)
    }

    /// Single-letter compartment code (`S`, `E`, `I`, `R`).
    pub fn code(self) -> char {
        match self {
            InfectionStatus::Susceptible => 'S',
            InfectionStatus::Exposed => 'E',
            InfectionStatus::Infectious => 'I',
            InfectionStatus::Recovered => 'R',
        }
    }
}

impl fmt::Display for InfectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One member of a rotating crew.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    pub shift: Shift,
    /// Day of the last rotation.  May lie after the current day for workers
    /// whose stagger offset has not yet elapsed.
    pub shift_changed_on: Day,
    pub infection_status: InfectionStatus,
    pub infection_status_changed_on: Day,
}

impl Worker {
    /// A susceptible worker on `shift`, last rotated on `shift_changed_on`.
    pub fn new(shift: Shift, shift_changed_on: Day) -> Self {
        Self {
            shift,
            shift_changed_on,
            infection_status: InfectionStatus::Susceptible,
            infection_status_changed_on: Day::ZERO,
        }
    }

    #[inline]
    pub fn is_on_site(&self) -> bool {
        self.shift == Shift::On
    }

    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.infection_status == InfectionStatus::Infectious
    }

    /// Copy of `self` moved to `shift` on `day`.
    #[inline]
    pub fn with_shift(self, shift: Shift, day: Day) -> Self {
        Self { shift, shift_changed_on: day, ..self }
    }

    /// Copy of `self` moved to `status` on `day`.
    #[inline]
    pub fn with_status(self, status: InfectionStatus, day: Day) -> Self {
        Self {
            infection_status: status,
            infection_status_changed_on: day,
            ..self
        }
    }

    /// Days spent in the current infection status as of `day`.
    #[inline]
    pub fn days_in_status(&self, day: Day) -> i64 {
        day.days_since(self.infection_status_changed_on)
    }
}

//! Simulation day counter.
//!
//! Time advances in whole days.  `Day(0)` is the initial crew snapshot; a run
//! of `n_days` covers `Day(0)..Day(n_days)`.
//!
//! Staggered crews start with `shift_changed_on` values *after* day 0 (see
//! `rig-schedule`), so elapsed-day arithmetic must tolerate a reference day in
//! the future.  [`Day::days_since`] therefore returns a signed count.

use std::fmt;

/// An absolute simulation day.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Signed number of days from `earlier` to `self`.
    ///
    /// Negative when `earlier` lies after `self`.
    #[inline]
    pub fn days_since(self, earlier: Day) -> i64 {
        i64::from(self.0) - i64::from(earlier.0)
    }

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

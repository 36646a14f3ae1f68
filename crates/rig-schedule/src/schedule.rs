//! Core schedule types: `ScheduleEntry` and `Schedule`.

use std::ops::Index;

use rig_agent::{Shift, ShiftMap};

use crate::{ScheduleError, ScheduleResult};

/// How long a shift lasts and which shift follows it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    /// Shift length in days.  Always > 0.
    pub length: u32,
    pub next_shift: Shift,
}

/// A rotation schedule: one [`ScheduleEntry`] per shift, forming the 2-cycle
/// ON → OFF → ON.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    entries: ShiftMap<ScheduleEntry>,
}

impl Schedule {
    /// The usual offshore rotation: `days_on` at the site, then `days_off`
    /// ashore.
    pub fn rotating(days_on: u32, days_off: u32) -> ScheduleResult<Self> {
        Self::new(ShiftMap::new(
            ScheduleEntry { length: days_on, next_shift: Shift::Off },
            ScheduleEntry { length: days_off, next_shift: Shift::On },
        ))
    }

    /// Validate an explicit entry map.
    ///
    /// Every length must be positive and each shift must hand over to the
    /// other one.
    pub fn new(entries: ShiftMap<ScheduleEntry>) -> ScheduleResult<Self> {
        for (shift, entry) in entries.iter() {
            if entry.length == 0 {
                return Err(ScheduleError::Invalid(format!(
                    "{shift} shift length must be > 0"
                )));
            }
            if entry.next_shift != shift.opposite() {
                return Err(ScheduleError::Invalid(format!(
                    "{shift} shift must be followed by {}, not {}",
                    shift.opposite(),
                    entry.next_shift
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Length of `shift` in days.
    #[inline]
    pub fn length(&self, shift: Shift) -> u32 {
        self.entries[shift].length
    }

    /// The shorter of the two shift lengths.  Stagger spacing must not
    /// exceed this.
    pub fn shortest_shift(&self) -> u32 {
        self.length(Shift::On).min(self.length(Shift::Off))
    }
}

impl Index<Shift> for Schedule {
    type Output = ScheduleEntry;
    #[inline]
    fn index(&self, shift: Shift) -> &ScheduleEntry {
        &self.entries[shift]
    }
}

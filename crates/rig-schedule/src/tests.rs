//! Unit tests for rig-schedule.

use rig_agent::{InfectionStatus, Shift, ShiftMap, Worker};
use rig_core::Day;

use crate::{
    allocated_crew_size, change_shift, initialize_crew, shift_headcount, Schedule, ScheduleEntry,
    ScheduleError,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Standard four-weeks-on, four-weeks-off rotation.
fn four_four() -> Schedule {
    Schedule::rotating(28, 28).unwrap()
}

// ── Schedule ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule {
    use super::*;

    #[test]
    fn rotating_is_a_two_cycle() {
        let s = Schedule::rotating(14, 21).unwrap();
        assert_eq!(s[Shift::On], ScheduleEntry { length: 14, next_shift: Shift::Off });
        assert_eq!(s[Shift::Off], ScheduleEntry { length: 21, next_shift: Shift::On });
        assert_eq!(s.shortest_shift(), 14);
    }

    #[test]
    fn zero_length_rejected() {
        assert!(matches!(Schedule::rotating(0, 28), Err(ScheduleError::Invalid(_))));
        assert!(matches!(Schedule::rotating(28, 0), Err(ScheduleError::Invalid(_))));
    }

    #[test]
    fn self_loop_rejected() {
        let entries = ShiftMap::new(
            ScheduleEntry { length: 7, next_shift: Shift::On },
            ScheduleEntry { length: 7, next_shift: Shift::On },
        );
        assert!(Schedule::new(entries).is_err());
    }
}

// ── change_shift ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod rotation {
    use super::*;

    #[test]
    fn rotates_exactly_at_shift_length() {
        let s = four_four();
        let w = Worker::new(Shift::On, Day(0));
        assert_eq!(change_shift(w, Day(27), &s), w);
        let moved = change_shift(w, Day(28), &s);
        assert_eq!(moved.shift, Shift::Off);
        assert_eq!(moved.shift_changed_on, Day(28));
    }

    #[test]
    fn future_offset_delays_rotation() {
        // Staggered workers start with shift_changed_on after day 0.
        let s = four_four();
        let w = Worker::new(Shift::On, Day(21));
        assert_eq!(change_shift(w, Day(1), &s), w);
        assert_eq!(change_shift(w, Day(48), &s), w);
        assert_eq!(change_shift(w, Day(49), &s).shift, Shift::Off);
    }

    #[test]
    fn infection_fields_preserved() {
        let s = Schedule::rotating(7, 14).unwrap();
        let w = Worker::new(Shift::Off, Day(0)).with_status(InfectionStatus::Exposed, Day(10));
        let moved = change_shift(w, Day(14), &s);
        assert_eq!(moved.shift, Shift::On);
        assert_eq!(moved.infection_status, InfectionStatus::Exposed);
        assert_eq!(moved.infection_status_changed_on, Day(10));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let s = Schedule::rotating(7, 14).unwrap();
        let mut w = Worker::new(Shift::On, Day(0));
        let mut changes = vec![];
        for d in 1..=42 {
            let next = change_shift(w, Day(d), &s);
            if next.shift != w.shift {
                changes.push(d);
            }
            w = next;
        }
        assert_eq!(changes, vec![7, 21, 28, 42]);
        assert_eq!(w.shift, Shift::On);
    }
}

// ── initialize_crew ───────────────────────────────────────────────────────────

#[cfg(test)]
mod roster {
    use super::*;

    #[test]
    fn equal_shifts_double_the_crew() {
        let s = four_four();
        let crew = initialize_crew(120, &s, 7).unwrap();
        assert_eq!(crew.len(), 240);
        assert_eq!(allocated_crew_size(120, &s), 240);
        assert_eq!(crew.count_shift(Shift::On), 120);
        assert_eq!(crew.count_shift(Shift::Off), 120);
    }

    #[test]
    fn allocation_uses_on_length_as_denominator() {
        let s = Schedule::rotating(14, 21).unwrap();
        assert_eq!(shift_headcount(10, &s, Shift::On), 10);
        assert_eq!(shift_headcount(10, &s, Shift::Off), 15);
        let s = Schedule::rotating(21, 14).unwrap();
        // 10 * 14 / 21 = 6 (integer division)
        assert_eq!(shift_headcount(10, &s, Shift::Off), 6);
        assert_eq!(initialize_crew(10, &s, 7).unwrap().len(), 16);
    }

    #[test]
    fn offsets_cycle_through_stagger() {
        let crew = initialize_crew(6, &four_four(), 7).unwrap();
        let on_offsets: Vec<u32> = crew
            .iter()
            .filter(|w| w.shift == Shift::On)
            .map(|w| w.shift_changed_on.0)
            .collect();
        assert_eq!(on_offsets, vec![0, 7, 14, 21, 0, 7]);
    }

    #[test]
    fn everyone_starts_susceptible() {
        let crew = initialize_crew(50, &four_four(), 7).unwrap();
        assert!(crew.iter().all(|w| {
            w.infection_status == InfectionStatus::Susceptible
                && w.infection_status_changed_on == Day::ZERO
        }));
    }

    #[test]
    fn stagger_keeps_on_site_headcount_constant() {
        let s = four_four();
        let mut crew = initialize_crew(120, &s, 7).unwrap();
        for d in 1..200 {
            crew = crew.map(|w| change_shift(w, Day(d), &s));
            assert_eq!(crew.count_shift(Shift::On), 120, "day {d}");
        }
    }

    #[test]
    fn degenerate_inputs_rejected() {
        let s = four_four();
        assert!(matches!(initialize_crew(0, &s, 7), Err(ScheduleError::Crew(_))));
        assert!(matches!(initialize_crew(10, &s, 0), Err(ScheduleError::Crew(_))));
    }
}

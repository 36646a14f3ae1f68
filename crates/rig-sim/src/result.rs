//! The full state history of one run.

use rig_agent::Crew;
use rig_core::Day;

/// One crew snapshot per simulated day, day 0 first.
///
/// Read-only once produced; downstream metrics borrow
/// [`snapshots`](Self::snapshots) or a [`truncated`](Self::truncated) prefix.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SimulationResult {
    days: Vec<Crew>,
}

impl SimulationResult {
    pub fn new(days: Vec<Crew>) -> Self {
        Self { days }
    }

    /// Number of snapshots (equals `n_days` for a completed run).
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, day: Day) -> Option<&Crew> {
        self.days.get(day.index())
    }

    pub fn snapshots(&self) -> &[Crew] {
        &self.days
    }

    /// The first `n_days` snapshots (all of them if the run is shorter).
    ///
    /// Lets one long run stand in for every shorter surveillance window.
    pub fn truncated(&self, n_days: usize) -> &[Crew] {
        &self.days[..n_days.min(self.days.len())]
    }

    pub fn last(&self) -> Option<&Crew> {
        self.days.last()
    }

    /// Iterate `(day, crew)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &Crew)> {
        self.days.iter().enumerate().map(|(i, c)| (Day(i as u32), c))
    }
}

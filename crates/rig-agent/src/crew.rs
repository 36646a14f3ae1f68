//! Fixed-size crew container and per-day compartment counts.

use rig_core::WorkerId;

use crate::{InfectionStatus, Shift, ShiftMap, Worker};

/// An ordered, fixed-length collection of workers.
///
/// A worker's position is its identity: the simulation maps each day's crew
/// to the next element-by-element, so `WorkerId(i)` refers to the same person
/// in every snapshot of a run.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crew {
    workers: Vec<Worker>,
}

impl Crew {
    pub fn new(workers: Vec<Worker>) -> Self {
        Self { workers }
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Worker> {
        self.workers.iter()
    }

    /// Workers paired with their stable ids.
    pub fn enumerate(&self) -> impl Iterator<Item = (WorkerId, &Worker)> + '_ {
        self.workers.iter().enumerate().map(|(i, w)| (WorkerId(i as u32), w))
    }

    /// A new crew with `f` applied to every worker, order preserved.
    pub fn map(&self, f: impl FnMut(Worker) -> Worker) -> Crew {
        Crew { workers: self.workers.iter().copied().map(f).collect() }
    }

    /// Number of workers currently on `shift`.
    pub fn count_shift(&self, shift: Shift) -> usize {
        self.workers.iter().filter(|w| w.shift == shift).count()
    }

    /// Number of workers in `status`, optionally restricted to one shift.
    pub fn count_status(&self, status: InfectionStatus, shift: Option<Shift>) -> usize {
        self.workers
            .iter()
            .filter(|w| w.infection_status == status)
            .filter(|w| shift.is_none_or(|s| w.shift == s))
            .count()
    }

    /// Compartment counts for this snapshot in one pass.
    pub fn summary(&self) -> CrewSummary {
        let mut summary = CrewSummary::default();
        for w in &self.workers {
            summary.by_shift[w.shift] += 1;
            summary.by_status[w.infection_status.index()] += 1;
            if w.is_infectious() {
                summary.infectious_by_shift[w.shift] += 1;
            }
        }
        summary
    }
}

impl FromIterator<Worker> for Crew {
    fn from_iter<I: IntoIterator<Item = Worker>>(iter: I) -> Self {
        Crew { workers: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Crew {
    type Item = &'a Worker;
    type IntoIter = std::slice::Iter<'a, Worker>;

    fn into_iter(self) -> Self::IntoIter {
        self.workers.iter()
    }
}

/// Headcounts of one crew snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrewSummary {
    /// Workers per shift.
    pub by_shift: ShiftMap<usize>,
    /// Workers per status, indexed by `InfectionStatus::index()`.
    pub by_status: [usize; 4],
    /// Infectious workers per shift.
    pub infectious_by_shift: ShiftMap<usize>,
}

impl CrewSummary {
    pub fn total(&self) -> usize {
        self.by_status.iter().sum()
    }

    pub fn status(&self, status: InfectionStatus) -> usize {
        self.by_status[status.index()]
    }
}

//! Plain data row types written by output backends.

use rig_agent::{Crew, InfectionStatus, Shift, Worker};
use rig_core::{Day, WorkerId};

/// Headcounts for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub day:                u32,
    pub susceptible:        u32,
    pub exposed:            u32,
    pub infectious:         u32,
    pub recovered:          u32,
    pub on_site:            u32,
    pub on_site_infectious: u32,
}

impl DaySummaryRow {
    pub fn from_crew(day: Day, crew: &Crew) -> Self {
        let s = crew.summary();
        let n = |x: usize| x as u32;
        Self {
            day:                day.0,
            susceptible:        n(s.status(InfectionStatus::Susceptible)),
            exposed:            n(s.status(InfectionStatus::Exposed)),
            infectious:         n(s.status(InfectionStatus::Infectious)),
            recovered:          n(s.status(InfectionStatus::Recovered)),
            on_site:            n(s.by_shift[Shift::On]),
            on_site_infectious: n(s.infectious_by_shift[Shift::On]),
        }
    }
}

/// One worker's state on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSnapshotRow {
    pub worker_id: u32,
    pub day:       u32,
    pub on_site:   bool,
    /// `S`, `E`, `I`, or `R`.
    pub status:    char,
}

impl WorkerSnapshotRow {
    pub fn new(worker_id: WorkerId, day: Day, worker: &Worker) -> Self {
        Self {
            worker_id: worker_id.0,
            day:     day.0,
            on_site: worker.is_on_site(),
            status:  worker.infection_status.code(),
        }
    }
}

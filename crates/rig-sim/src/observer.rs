//! Simulation observer trait for progress reporting and data collection.

use rig_agent::Crew;
use rig_core::Day;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — prevalence printer
///
/// ```rust,ignore
/// struct PrevalencePrinter;
///
/// impl SimObserver for PrevalencePrinter {
///     fn on_day_end(&mut self, day: Day, crew: &Crew) {
///         let s = crew.summary();
///         println!("{day}: {} infectious on site", s.infectious_by_shift[Shift::On]);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per snapshot, starting with the initial crew on day 0.
    fn on_day_end(&mut self, _day: Day, _crew: &Crew) {}

    /// Called once after the final snapshot.
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

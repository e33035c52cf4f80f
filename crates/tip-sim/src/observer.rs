//! Simulation observer trait for progress reporting and data collection.

use tip_agent::Population;
use tip_grid::Lattice;
use tip_metric::TieCounts;

use crate::{AttemptOutcome, SimulationResult};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] and
/// [`Simulation::run_attempts`][crate::Simulation::run_attempts].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: move counter
///
/// ```rust,ignore
/// struct MoveCounter(u64);
///
/// impl SimObserver for MoveCounter {
///     fn on_attempt(&mut self, _attempt: u64, outcome: &AttemptOutcome) {
///         if outcome.is_move() {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of `run` with the grid as it stands and the
    /// baseline ties recorded right after population.
    fn on_populated(
        &mut self,
        _lattice:    &Lattice,
        _population: &Population,
        _baseline:   &TieCounts,
    ) {}

    /// Called after every move attempt.  `attempt` counts from zero over the
    /// whole run.
    fn on_attempt(&mut self, _attempt: u64, _outcome: &AttemptOutcome) {}

    /// Called once by `run` after the final measurement.
    fn on_finish(
        &mut self,
        _lattice:    &Lattice,
        _population: &Population,
        _result:     &SimulationResult,
    ) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

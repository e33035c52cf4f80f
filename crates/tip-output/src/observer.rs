//! `SnapshotObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tip_agent::Population;
use tip_grid::Lattice;
use tip_metric::TieCounts;
use tip_sim::{SimObserver, SimulationResult};

use crate::row::{GridSnapshotRow, SnapshotPhase};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the grid when `run` starts (phase
/// `initial`) and again after the last attempt (phase `final`).
///
/// `initial` is the grid as `run` finds it.  It is the populated grid only
/// when no attempts were made through `run_attempts` or `step` beforehand.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SnapshotObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SnapshotObserver<W> {
    fn on_populated(&mut self, lattice: &Lattice, population: &Population, _baseline: &TieCounts) {
        let rows = GridSnapshotRow::snapshot(SnapshotPhase::Initial, lattice, population);
        let result = self.writer.write_grid(&rows);
        self.store_err(result);
    }

    fn on_finish(&mut self, lattice: &Lattice, population: &Population, _result: &SimulationResult) {
        let rows = GridSnapshotRow::snapshot(SnapshotPhase::Final, lattice, population);
        let result = self.writer.write_grid(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

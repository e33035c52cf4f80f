//! The `OutputWriter` trait implemented by backend writers.

use tip_sim::SweepRow;

use crate::{GridSnapshotRow, OutputResult, SweepResultRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write a batch of grid snapshot rows.
    fn write_grid(&mut self, rows: &[GridSnapshotRow]) -> OutputResult<()>;

    /// Write one sweep result row.
    fn write_sweep_row(&mut self, row: &SweepResultRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;

    /// Write every row of a finished sweep, in order.
    fn write_sweep(&mut self, rows: &[SweepRow]) -> OutputResult<()> {
        for row in rows {
            self.write_sweep_row(&SweepResultRow::from(row))?;
        }
        Ok(())
    }
}

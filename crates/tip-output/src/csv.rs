//! CSV output backend.
//!
//! Two files live in an output directory:
//! - `grid_snapshots.csv`, written by a single run
//! - `sweep_results.csv`, written by a sweep
//!
//! A `CsvWriter` opens only the file its constructor names, so a run and a
//! sweep can share one directory without clobbering each other.
//!
//! Empty fields stand for "none": a vacant cell's group, or the mixed
//! fraction of a run that ended without ties.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{GridSnapshotRow, OutputError, OutputResult, SweepResultRow};

pub const GRID_SNAPSHOTS_FILE: &str = "grid_snapshots.csv";
pub const SWEEP_RESULTS_FILE: &str = "sweep_results.csv";

const GRID_HEADER: [&str; 5] = ["phase", "cell", "x", "y", "group"];

const SWEEP_HEADER: [&str; 12] = [
    "run",
    "in_threshold",
    "out_threshold",
    "move_attempts",
    "replicate",
    "seed",
    "successful_moves",
    "baseline_same",
    "baseline_mixed",
    "final_same",
    "final_mixed",
    "final_mixed_fraction",
];

/// Writes simulation output to one of the two CSV files.
pub struct CsvWriter {
    grid:     Option<Writer<File>>,
    sweep:    Option<Writer<File>>,
    finished: bool,
}

impl CsvWriter {
    /// Create (or truncate) `grid_snapshots.csv` in `dir` and write its
    /// header.  `sweep_results.csv` is left untouched.
    pub fn grid(dir: &Path) -> OutputResult<Self> {
        let grid = open(dir, GRID_SNAPSHOTS_FILE, &GRID_HEADER)?;
        Ok(Self { grid: Some(grid), sweep: None, finished: false })
    }

    /// Create (or truncate) `sweep_results.csv` in `dir` and write its
    /// header.  `grid_snapshots.csv` is left untouched.
    pub fn sweep(dir: &Path) -> OutputResult<Self> {
        let sweep = open(dir, SWEEP_RESULTS_FILE, &SWEEP_HEADER)?;
        Ok(Self { grid: None, sweep: Some(sweep), finished: false })
    }
}

fn open(dir: &Path, file: &str, header: &[&str]) -> OutputResult<Writer<File>> {
    let mut w = Writer::from_path(dir.join(file))?;
    w.write_record(header)?;
    Ok(w)
}

impl OutputWriter for CsvWriter {
    fn write_grid(&mut self, rows: &[GridSnapshotRow]) -> OutputResult<()> {
        let grid = self.grid.as_mut().ok_or(OutputError::NotOpened(GRID_SNAPSHOTS_FILE))?;
        for row in rows {
            grid.write_record(&[
                row.phase.as_str().to_owned(),
                row.cell.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.group.map(|g| g.0.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_sweep_row(&mut self, row: &SweepResultRow) -> OutputResult<()> {
        let sweep = self.sweep.as_mut().ok_or(OutputError::NotOpened(SWEEP_RESULTS_FILE))?;
        sweep.write_record(&[
            row.run.to_string(),
            row.in_threshold.to_string(),
            row.out_threshold.to_string(),
            row.move_attempts.to_string(),
            row.replicate.to_string(),
            row.seed.to_string(),
            row.successful_moves.to_string(),
            row.baseline_same.to_string(),
            row.baseline_mixed.to_string(),
            row.final_same.to_string(),
            row.final_mixed.to_string(),
            row.final_mixed_fraction.map(|f| f.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        for w in [&mut self.grid, &mut self.sweep].into_iter().flatten() {
            w.flush()?;
        }
        Ok(())
    }
}

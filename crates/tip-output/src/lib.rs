//! `tip-output`: files for plotting and analysis.
//!
//! [`CsvWriter`] writes one of two files in an output directory:
//!
//! | File                  | One row per                               |
//! |-----------------------|-------------------------------------------|
//! | `grid_snapshots.csv`  | cell, at the initial and final snapshot   |
//! | `sweep_results.csv`   | sweep run                                 |
//!
//! [`SnapshotObserver`] drives a writer from `tip_sim::SimObserver` hooks;
//! [`OutputWriter::write_sweep`] writes the rows of `tip_sim::run_sweep`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tip_output::{CsvWriter, SnapshotObserver};
//!
//! let writer = CsvWriter::grid(Path::new("./output"))?;
//! let mut obs = SnapshotObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotObserver;
pub use row::{GridSnapshotRow, SnapshotPhase, SweepResultRow};
pub use writer::OutputWriter;

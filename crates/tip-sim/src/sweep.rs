//! Parameter sweeps: many independent runs over a grid of settings.
//!
//! The grid is the Cartesian product
//! `in_thresholds × out_thresholds × move_attempts × 0..replicates`,
//! enumerated in that nesting order (last axis fastest).  The position in
//! that enumeration is the run index.  Each run gets its own seed,
//! `derive_seed(spec.seed, index)`, and builds its own lattice and
//! population, so runs share nothing and their results do not depend on
//! which thread ran them.

use serde::{Deserialize, Serialize};
use tip_core::derive_seed;
use tracing::{debug, info};

use crate::{SimError, SimResult, SimulationConfig, SimulationResult, run_simulation};

/// What to sweep.
///
/// The thresholds of a point are applied to every group of `base`, in and
/// out alike.  `base.move_attempts` and `base.seed` are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepSpec {
    pub base:           SimulationConfig,
    pub in_thresholds:  Vec<f64>,
    pub out_thresholds: Vec<f64>,
    pub move_attempts:  Vec<u64>,
    pub replicates:     u32,
    pub seed:           u64,
}

/// One run of a sweep.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    pub index:         u64,
    pub in_threshold:  f64,
    pub out_threshold: f64,
    pub move_attempts: u64,
    pub replicate:     u32,
    pub seed:          u64,
}

/// A finished run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepRow {
    pub point:  SweepPoint,
    pub result: SimulationResult,
}

impl SweepSpec {
    /// Every run of the sweep, in run-index order.
    ///
    /// # Errors
    ///
    /// `EmptySweepAxis` when an axis has no values or `replicates == 0`.
    pub fn points(&self) -> SimResult<Vec<SweepPoint>> {
        if self.in_thresholds.is_empty() {
            return Err(SimError::EmptySweepAxis("in_thresholds"));
        }
        if self.out_thresholds.is_empty() {
            return Err(SimError::EmptySweepAxis("out_thresholds"));
        }
        if self.move_attempts.is_empty() {
            return Err(SimError::EmptySweepAxis("move_attempts"));
        }
        if self.replicates == 0 {
            return Err(SimError::EmptySweepAxis("replicates"));
        }

        let mut points = Vec::with_capacity(
            self.in_thresholds.len()
                * self.out_thresholds.len()
                * self.move_attempts.len()
                * self.replicates as usize,
        );
        for &in_threshold in &self.in_thresholds {
            for &out_threshold in &self.out_thresholds {
                for &move_attempts in &self.move_attempts {
                    for replicate in 0..self.replicates {
                        let index = points.len() as u64;
                        points.push(SweepPoint {
                            index,
                            in_threshold,
                            out_threshold,
                            move_attempts,
                            replicate,
                            seed: derive_seed(self.seed, index),
                        });
                    }
                }
            }
        }
        Ok(points)
    }

    /// The full config of one run.
    pub fn config_for(&self, point: &SweepPoint) -> SimulationConfig {
        let mut config = self.base.clone();
        for group in &mut config.groups {
            group.in_threshold = point.in_threshold;
            group.out_threshold = point.out_threshold;
        }
        config.move_attempts = point.move_attempts;
        config.seed = Some(point.seed);
        config
    }
}

/// Run every point of `spec`.
///
/// Rows come back in run-index order.  With the `parallel` feature the runs
/// execute on Rayon's thread pool; the rows are identical either way.
pub fn run_sweep(spec: &SweepSpec) -> SimResult<Vec<SweepRow>> {
    let points = spec.points()?;
    info!(runs = points.len(), "sweep started");

    let run_point = |point: &SweepPoint| -> SimResult<SweepRow> {
        let result = run_simulation(&spec.config_for(point))?;
        debug!(
            run     = point.index,
            tau_in  = point.in_threshold,
            tau_out = point.out_threshold,
            moves   = result.successful_moves,
            "sweep run finished"
        );
        Ok(SweepRow { point: *point, result })
    };

    #[cfg(not(feature = "parallel"))]
    let rows = points.iter().map(run_point).collect::<SimResult<Vec<_>>>()?;

    #[cfg(feature = "parallel")]
    let rows = {
        use rayon::prelude::*;
        points.par_iter().map(run_point).collect::<SimResult<Vec<_>>>()?
    };

    info!(runs = rows.len(), "sweep finished");
    Ok(rows)
}

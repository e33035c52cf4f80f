//! Plain data row types written by output backends.

use tip_agent::Population;
use tip_core::GroupId;
use tip_grid::Lattice;
use tip_sim::SweepRow;

/// When a grid snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotPhase {
    /// Right after population.
    Initial,
    /// After the last move attempt.
    Final,
}

impl SnapshotPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            SnapshotPhase::Initial => "initial",
            SnapshotPhase::Final   => "final",
        }
    }
}

/// One cell of a grid snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapshotRow {
    pub phase: SnapshotPhase,
    pub cell:  u32,
    pub x:     u32,
    pub y:     u32,
    /// `None` when the cell is vacant.
    pub group: Option<GroupId>,
}

impl GridSnapshotRow {
    /// One row per cell of `lattice`, in cell-id order.
    pub fn snapshot(phase: SnapshotPhase, lattice: &Lattice, population: &Population) -> Vec<Self> {
        population
            .cell_states()
            .map(|(cell, state)| {
                let (x, y) = lattice.coords(cell);
                GridSnapshotRow { phase, cell: cell.0, x, y, group: state.group() }
            })
            .collect()
    }
}

/// One sweep run, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepResultRow {
    pub run:                  u64,
    pub in_threshold:         f64,
    pub out_threshold:        f64,
    pub move_attempts:        u64,
    pub replicate:            u32,
    pub seed:                 u64,
    pub successful_moves:     u64,
    pub baseline_same:        u64,
    pub baseline_mixed:       u64,
    pub final_same:           u64,
    pub final_mixed:          u64,
    /// `final_mixed / (final_mixed + final_same)`; `None` with no ties.
    pub final_mixed_fraction: Option<f64>,
}

impl From<&SweepRow> for SweepResultRow {
    fn from(row: &SweepRow) -> Self {
        let p = &row.point;
        let r = &row.result;
        Self {
            run:                  p.index,
            in_threshold:         p.in_threshold,
            out_threshold:        p.out_threshold,
            move_attempts:        p.move_attempts,
            replicate:            p.replicate,
            seed:                 p.seed,
            successful_moves:     r.successful_moves,
            baseline_same:        r.baseline_ties.same_total(),
            baseline_mixed:       r.baseline_ties.mixed,
            final_same:           r.final_ties.same_total(),
            final_mixed:          r.final_ties.mixed,
            final_mixed_fraction: r.final_ties.mixed_fraction(),
        }
    }
}

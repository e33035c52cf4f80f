//! Group composition of a cell's neighborhood.

use tip_core::{CellId, GroupId};

use crate::PolicyContext;

/// Added to the neighbor total before dividing, so an isolated cell yields
/// fractions of `0.0` instead of `NaN`.  It also pulls every fraction
/// slightly below its exact value (`1/1` becomes `0.999`), and the decision
/// rules depend on that.
pub const SMOOTHING: f64 = 0.001;

/// Counts of occupied neighbors of one cell, relative to a group.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Composition {
    pub in_group:  u32,
    pub out_group: u32,
}

impl Composition {
    /// Count the residents adjacent to `cell` that do / do not belong to
    /// `group`.  Vacant neighbors are skipped.  `cell` itself is never its
    /// own neighbor, but a resident of `group` living next to `cell` is
    /// counted even when it is the one evaluating the spot.
    pub fn around(cell: CellId, group: GroupId, ctx: &PolicyContext<'_>) -> Self {
        let mut comp = Composition::default();
        for &n in ctx.lattice.neighbors(cell) {
            match ctx.population.group_at(n) {
                None => {}
                Some(g) if g == group => comp.in_group += 1,
                Some(_) => comp.out_group += 1,
            }
        }
        comp
    }

    #[inline]
    pub fn total(self) -> u32 {
        self.in_group + self.out_group
    }

    /// `in_group / (total + SMOOTHING)`.
    #[inline]
    pub fn in_fraction(self) -> f64 {
        self.in_group as f64 / (self.total() as f64 + SMOOTHING)
    }

    /// `out_group / (total + SMOOTHING)`.
    #[inline]
    pub fn out_fraction(self) -> f64 {
        self.out_group as f64 / (self.total() as f64 + SMOOTHING)
    }
}

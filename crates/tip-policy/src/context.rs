//! Read-only run state passed to every policy call.

use tip_agent::Population;
use tip_grid::Lattice;

/// Borrowed view of the neighborhood graph and who lives where.
///
/// Built by the driver for each decision; the driver never mutates the
/// population while a context is live.
#[derive(Copy, Clone)]
pub struct PolicyContext<'a> {
    pub lattice:    &'a Lattice,
    pub population: &'a Population,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(lattice: &'a Lattice, population: &'a Population) -> Self {
        Self { lattice, population }
    }
}

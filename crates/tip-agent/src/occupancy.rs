//! Cell → resident mapping with an explicit free-cell set.
//!
//! # Data layout
//!
//! `cells[c]` is `Some(resident)` or `None` (vacant).  The vacant cells are
//! also kept in `free`, an unordered `Vec`, with `free_slot[c]` recording
//! each vacant cell's position in it.  Occupying a cell is a `swap_remove`
//! and vacating one is a `push`, both O(1), and a uniform draw from `free`
//! picks a uniformly random vacant cell without retrying.

use tip_core::{CellId, ResidentId, SimRng, TipError, TipResult};

use crate::Resident;

/// `free_slot` value for occupied cells.
const NOT_FREE: u32 = u32::MAX;

#[derive(Clone, Debug)]
pub struct Occupancy {
    cells:     Vec<Option<ResidentId>>,
    free:      Vec<CellId>,
    free_slot: Vec<u32>,
}

impl Occupancy {
    /// All `cell_count` cells vacant.
    pub fn new(cell_count: usize) -> Self {
        Self {
            cells:     vec![None; cell_count],
            free:      (0..cell_count as u32).map(CellId).collect(),
            free_slot: (0..cell_count as u32).collect(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.free.len()
    }

    /// Resident living at `cell`, `None` if vacant.
    ///
    /// # Panics
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn occupant(&self, cell: CellId) -> Option<ResidentId> {
        self.cells[cell.index()]
    }

    /// # Panics
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn is_free(&self, cell: CellId) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// `(cell, occupant)` for every cell in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Option<ResidentId>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &occ)| (CellId(i as u32), occ))
    }

    /// Vacant cells, in no particular order.
    pub fn free_cells(&self) -> &[CellId] {
        &self.free
    }

    fn check(&self, cell: CellId) -> TipResult<()> {
        if cell.index() < self.cells.len() {
            Ok(())
        } else {
            Err(TipError::CellOutOfRange(cell))
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Put an unplaced `resident` on a uniformly random vacant cell.
    ///
    /// Draws directly from the free-cell set, so it never retries.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` when no cell is vacant.
    /// - `AlreadyPlaced` when the resident already has a home.
    pub fn place_random(&mut self, resident: &mut Resident, rng: &mut SimRng) -> TipResult<CellId> {
        if resident.home.is_some() {
            return Err(TipError::AlreadyPlaced(resident.id));
        }
        let slot = rng
            .index_below(self.free.len())
            .ok_or(TipError::CapacityExceeded { requested: 1, free: 0 })?;
        let cell = self.free[slot];
        self.occupy(cell, resident.id);
        resident.home = Some(cell);
        Ok(cell)
    }

    /// Put an unplaced `resident` on the vacant cell `cell`.
    ///
    /// # Errors
    ///
    /// `CellOutOfRange`, `AlreadyPlaced`, or `CellOccupied`.
    pub fn place_at(&mut self, resident: &mut Resident, cell: CellId) -> TipResult<()> {
        self.check(cell)?;
        if resident.home.is_some() {
            return Err(TipError::AlreadyPlaced(resident.id));
        }
        if let Some(occupant) = self.cells[cell.index()] {
            return Err(TipError::CellOccupied { cell, occupant });
        }
        self.occupy(cell, resident.id);
        resident.home = Some(cell);
        Ok(())
    }

    /// Move `resident` from `from` to the vacant cell `to`.
    ///
    /// Every precondition is checked before anything is written, so on error
    /// nothing changes and on success the old cell is vacant, the new cell
    /// holds the resident, and `resident.home == Some(to)`.
    ///
    /// # Errors
    ///
    /// - `CellOutOfRange` if either cell is off the grid.
    /// - `NotAtCell` if the resident does not live at `from`.
    /// - `CellOccupied` if `to` is not vacant (including `to == from`).
    pub fn move_resident(
        &mut self,
        resident: &mut Resident,
        from:     CellId,
        to:       CellId,
    ) -> TipResult<()> {
        self.check(from)?;
        self.check(to)?;
        if resident.home != Some(from) || self.cells[from.index()] != Some(resident.id) {
            return Err(TipError::NotAtCell { resident: resident.id, cell: from });
        }
        if let Some(occupant) = self.cells[to.index()] {
            return Err(TipError::CellOccupied { cell: to, occupant });
        }

        self.release(from);
        self.occupy(to, resident.id);
        resident.home = Some(to);
        Ok(())
    }

    // ── Free-set bookkeeping ──────────────────────────────────────────────

    fn occupy(&mut self, cell: CellId, resident: ResidentId) {
        debug_assert!(self.cells[cell.index()].is_none());
        let slot = self.free_slot[cell.index()] as usize;
        self.free.swap_remove(slot);
        if let Some(&moved) = self.free.get(slot) {
            self.free_slot[moved.index()] = slot as u32;
        }
        self.free_slot[cell.index()] = NOT_FREE;
        self.cells[cell.index()] = Some(resident);
    }

    fn release(&mut self, cell: CellId) {
        debug_assert!(self.cells[cell.index()].is_some());
        self.cells[cell.index()] = None;
        self.free_slot[cell.index()] = self.free.len() as u32;
        self.free.push(cell);
    }
}

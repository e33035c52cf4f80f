//! `Population`: the mutable state of one run: residents plus occupancy.

use tip_core::{CellId, GroupId, ResidentId, SimRng, TipError, TipResult};
use tip_grid::Lattice;

use crate::{Occupancy, Resident, ResidentStore, Thresholds};

/// What a cell holds, as seen by visualization and reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Vacant,
    Occupied(GroupId),
}

impl CellState {
    /// The occupying group, `None` when vacant.
    pub fn group(self) -> Option<GroupId> {
        match self {
            CellState::Vacant => None,
            CellState::Occupied(g) => Some(g),
        }
    }
}

/// Residents and their homes, kept consistent with each other.
///
/// The fields are `pub` for read access; mutate only through the methods
/// here (or the `Occupancy` methods that take the matching `&mut Resident`)
/// so the store and the occupancy map never disagree.
#[derive(Clone, Debug)]
pub struct Population {
    pub residents: ResidentStore,
    pub occupancy: Occupancy,
    group_count:   usize,
}

impl Population {
    /// Empty population over `cell_count` cells with `group_count` groups.
    pub fn new(cell_count: usize, group_count: usize) -> TipResult<Self> {
        if group_count > u16::MAX as usize {
            return Err(TipError::InvalidConfiguration(format!(
                "{group_count} groups exceeds the maximum of {}",
                u16::MAX
            )));
        }
        Ok(Self {
            residents: ResidentStore::new(),
            occupancy: Occupancy::new(cell_count),
            group_count,
        })
    }

    /// Empty population sized for `lattice`.
    pub fn for_lattice(lattice: &Lattice, group_count: usize) -> TipResult<Self> {
        Self::new(lattice.cell_count(), group_count)
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    pub fn resident(&self, id: ResidentId) -> TipResult<&Resident> {
        self.residents.get(id)
    }

    // ── Population & placement ────────────────────────────────────────────

    /// Create an unplaced resident of `group`.
    pub fn spawn(&mut self, group: GroupId, thresholds: Thresholds) -> TipResult<ResidentId> {
        if group.index() >= self.group_count {
            return Err(TipError::InvalidConfiguration(format!(
                "{group} is not one of the {} declared groups",
                self.group_count
            )));
        }
        let id = self.residents.next_id();
        self.residents.push(Resident::new(id, group, thresholds))
    }

    /// Place resident `id` on a uniformly random vacant cell.
    pub fn place_random(&mut self, id: ResidentId, rng: &mut SimRng) -> TipResult<CellId> {
        let resident = self.residents.get_mut(id)?;
        self.occupancy.place_random(resident, rng)
    }

    /// Place resident `id` on the vacant cell `cell`.
    pub fn place_at(&mut self, id: ResidentId, cell: CellId) -> TipResult<()> {
        let resident = self.residents.get_mut(id)?;
        self.occupancy.place_at(resident, cell)
    }

    /// Move resident `id` from its current home to the vacant cell `to`.
    /// Returns the cell it left.
    pub fn relocate(&mut self, id: ResidentId, to: CellId) -> TipResult<CellId> {
        let resident = self.residents.get_mut(id)?;
        let from = resident.home.ok_or(TipError::NotPlaced(id))?;
        self.occupancy.move_resident(resident, from, to)?;
        Ok(from)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Group of the resident at `cell`, `None` if vacant.
    ///
    /// # Panics
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn group_at(&self, cell: CellId) -> Option<GroupId> {
        // Occupancy only ever holds ids handed out by `self.residents`.
        self.occupancy
            .occupant(cell)
            .map(|id| self.residents.as_slice()[id.index()].group)
    }

    /// `(cell, state)` for every cell in id order.
    pub fn cell_states(&self) -> impl Iterator<Item = (CellId, CellState)> + '_ {
        self.occupancy.iter().map(|(cell, occupant)| {
            let state = match occupant {
                None => CellState::Vacant,
                Some(id) => CellState::Occupied(self.residents.as_slice()[id.index()].group),
            };
            (cell, state)
        })
    }
}

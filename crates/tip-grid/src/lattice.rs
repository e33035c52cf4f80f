//! Lattice representation and construction.
//!
//! # Data layout
//!
//! Adjacency is stored in **Compressed Sparse Row (CSR)** format.  Given a
//! `CellId c`, its neighbors occupy the slice:
//!
//! ```text
//! adj[ adj_start[c] .. adj_start[c+1] ]
//! ```
//!
//! Each undirected edge appears twice in `adj` (once per endpoint).  Within a
//! row the neighbors are in ascending id order.

use tip_core::{CellId, TipError, TipResult};

/// Largest supported cell count.  Keeps `8 * cells` inside the `u32` row
/// pointers.
const MAX_CELLS: u64 = (u32::MAX / 8) as u64;

/// Candidate `(dx, dy)` offsets, ordered by `dy` then `dx` so that the
/// neighbors of a cell come out in ascending id order.
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// The adjacency rule for two distinct cells `dx` columns and `dy` rows apart.
#[inline]
pub fn lattice_rule(dx: u32, dy: u32, diagonals: bool) -> bool {
    dx + dy == 1 || (diagonals && dx == 1 && dy == 1)
}

// ── Lattice ───────────────────────────────────────────────────────────────────

/// Undirected, loop-free adjacency graph over a `rows × cols` grid.
///
/// Construct with [`build_lattice`].
#[derive(Clone, Debug)]
pub struct Lattice {
    pub rows:      u32,
    pub cols:      u32,
    pub diagonals: bool,

    /// CSR row pointer.  Length = `cell_count + 1`.
    pub adj_start: Vec<u32>,

    /// Flat neighbor array, indexed through `adj_start`.
    pub adj: Vec<CellId>,
}

impl Lattice {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.adj_start.len() - 1
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.len() / 2
    }

    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.index() < self.cell_count()
    }

    /// Iterator over every cell in id order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + use<> {
        (0..self.cell_count() as u32).map(CellId)
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// `(x, y)` of `cell`: `x = id % cols`, `y = id / cols`.
    #[inline]
    pub fn coords(&self, cell: CellId) -> (u32, u32) {
        (cell.0 % self.cols, cell.0 / self.cols)
    }

    /// Cell at `(x, y)`, or `None` if off the grid.
    #[inline]
    pub fn cell_at(&self, x: u32, y: u32) -> Option<CellId> {
        (x < self.cols && y < self.rows).then(|| CellId(y * self.cols + x))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `cell` in ascending id order.
    ///
    /// # Panics
    /// Panics if `cell` is outside the grid.
    #[inline]
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        let start = self.adj_start[cell.index()] as usize;
        let end   = self.adj_start[cell.index() + 1] as usize;
        &self.adj[start..end]
    }

    #[inline]
    pub fn degree(&self, cell: CellId) -> usize {
        self.neighbors(cell).len()
    }

    /// Every undirected edge exactly once, as `(a, b)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        self.cells().flat_map(move |a| {
            self.neighbors(a)
                .iter()
                .filter(move |&&b| b > a)
                .map(move |&b| (a, b))
        })
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

/// Build the adjacency graph over `rows * cols` cells.
///
/// Enumerates the eight neighbor offsets of each cell and keeps the ones
/// accepted by [`lattice_rule`], so construction is O(cells) and yields the
/// same edge set as testing every pair of cells.
///
/// # Errors
///
/// `InvalidConfiguration` if either dimension is zero or the grid is larger
/// than the id space supports.
pub fn build_lattice(rows: u32, cols: u32, diagonals: bool) -> TipResult<Lattice> {
    if rows == 0 || cols == 0 {
        return Err(TipError::InvalidConfiguration(format!(
            "grid dimensions must be positive, got {rows}x{cols}"
        )));
    }
    let cells = rows as u64 * cols as u64;
    if cells > MAX_CELLS {
        return Err(TipError::InvalidConfiguration(format!(
            "grid of {cells} cells exceeds the supported maximum of {MAX_CELLS}"
        )));
    }
    let cells = cells as usize;
    let per_cell = if diagonals { 8 } else { 4 };

    let mut adj_start = Vec::with_capacity(cells + 1);
    let mut adj       = Vec::with_capacity(cells * per_cell);
    adj_start.push(0u32);

    for y in 0..rows as i64 {
        for x in 0..cols as i64 {
            for (dx, dy) in OFFSETS {
                if !lattice_rule(dx.unsigned_abs() as u32, dy.unsigned_abs() as u32, diagonals) {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= cols as i64 || ny >= rows as i64 {
                    continue;
                }
                adj.push(CellId((ny * cols as i64 + nx) as u32));
            }
            adj_start.push(adj.len() as u32);
        }
    }
    debug_assert_eq!(adj_start.len(), cells + 1);

    Ok(Lattice { rows, cols, diagonals, adj_start, adj })
}

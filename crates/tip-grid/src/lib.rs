//! `tip-grid`: the neighborhood graph.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`lattice`] | `Lattice` (CSR adjacency), `build_lattice`, `lattice_rule` |
//!
//! Cells are numbered row-major: `x = id % cols`, `y = id / cols`.  Two
//! distinct cells are adjacent iff they are orthogonal neighbors, or diagonal
//! neighbors when diagonals are enabled.  The graph is built once per run and
//! never mutated.

pub mod lattice;

#[cfg(test)]
mod tests;

pub use lattice::{Lattice, build_lattice, lattice_rule};

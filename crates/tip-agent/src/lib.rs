//! `tip-agent`: residents and who lives where.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`resident`]   | `Resident`, `Thresholds`                               |
//! | [`store`]      | `ResidentStore` (dense, indexed by `ResidentId`)       |
//! | [`occupancy`]  | `Occupancy` (cell → resident map + free-cell set)      |
//! | [`population`] | `Population` (store + occupancy), `CellState`          |
//!
//! # Invariants
//!
//! - A cell holds at most one resident; a placed resident occupies exactly
//!   one cell, and `resident.home` names that cell.
//! - Occupancy only changes through [`Occupancy::place_random`],
//!   [`Occupancy::place_at`] and [`Occupancy::move_resident`], which update
//!   the resident in the same call.
//! - Vacancy is always an explicit `None` / [`CellState::Vacant`].

pub mod occupancy;
pub mod population;
pub mod resident;
pub mod store;

#[cfg(test)]
mod tests;

pub use occupancy::Occupancy;
pub use population::{CellState, Population};
pub use resident::{Resident, Thresholds};
pub use store::ResidentStore;

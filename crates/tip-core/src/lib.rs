//! `tip-core`: foundational types for the `tipping` segregation simulator.
//!
//! This crate is a dependency of every other `tip-*` crate.  It has no
//! `tip-*` dependencies and only `rand` and `thiserror` externally (plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                        |
//! |-----------|-------------------------------------------------|
//! | [`ids`]   | `CellId`, `ResidentId`, `GroupId`               |
//! | [`rng`]   | `SimRng` (one per simulation run), seed mixing  |
//! | [`error`] | `TipError`, `TipResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the id types.      |

pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TipError, TipResult};
pub use ids::{CellId, GroupId, ResidentId};
pub use rng::{SimRng, derive_seed};

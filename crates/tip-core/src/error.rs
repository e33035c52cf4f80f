//! Simulator error type.
//!
//! Sub-crates either return `TipError` directly or wrap it as one variant of
//! their own enum (see `tip-sim::SimError`).

use thiserror::Error;

use crate::{CellId, ResidentId};

/// The top-level error type for the grid, population, and policy crates.
///
/// `CapacityExceeded` and `InvalidConfiguration` are caller errors.  The
/// remaining variants are internal invariant violations: correct driver code
/// never produces them, and policy rejections are never reported this way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipError {
    #[error("cannot place {requested} resident(s): only {free} free cell(s)")]
    CapacityExceeded { requested: usize, free: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("cell {cell} is already occupied by {occupant}")]
    CellOccupied { cell: CellId, occupant: ResidentId },

    #[error("{resident} does not live at {cell}")]
    NotAtCell { resident: ResidentId, cell: CellId },

    #[error("{0} has already been placed")]
    AlreadyPlaced(ResidentId),

    #[error("{0} has not been placed on the grid")]
    NotPlaced(ResidentId),

    #[error("{0} not found")]
    ResidentNotFound(ResidentId),

    #[error("{0} is outside the grid")]
    CellOutOfRange(CellId),
}

impl TipError {
    /// `true` for errors that indicate a defect rather than bad input.
    pub fn is_invariant_violation(&self) -> bool {
        !matches!(
            self,
            TipError::CapacityExceeded { .. } | TipError::InvalidConfiguration(_)
        )
    }
}

/// Shorthand result type for all `tip-*` crates.
pub type TipResult<T> = Result<T, TipError>;

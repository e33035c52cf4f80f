//! The resident entity and its relocation preferences.

use tip_core::{CellId, GroupId, ResidentId, TipError, TipResult};

/// Minimum acceptable fractions of same-group and other-group neighbors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// τ_in: minimum fraction of adjacent residents from the own group.
    pub in_group: f64,
    /// τ_out: minimum fraction of adjacent residents from other groups.
    pub out_group: f64,
}

impl Thresholds {
    /// Validated thresholds; both must lie in `[0, 1]`.
    pub fn new(in_group: f64, out_group: f64) -> TipResult<Self> {
        for (name, v) in [("in-group", in_group), ("out-group", out_group)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(TipError::InvalidConfiguration(format!(
                    "{name} threshold {v} is outside [0, 1]"
                )));
            }
        }
        Ok(Self { in_group, out_group })
    }

    /// Thresholds that any neighborhood satisfies.
    pub const INDIFFERENT: Thresholds = Thresholds { in_group: 0.0, out_group: 0.0 };
}

/// One agent of the model.
#[derive(Clone, Debug, PartialEq)]
pub struct Resident {
    pub id:         ResidentId,
    pub group:      GroupId,
    pub thresholds: Thresholds,
    /// Current cell.  `None` only between creation and placement.
    pub home:       Option<CellId>,
}

impl Resident {
    /// An unplaced resident.
    pub fn new(id: ResidentId, group: GroupId, thresholds: Thresholds) -> Self {
        Self { id, group, thresholds, home: None }
    }
}

//! Schelling's threshold rule with bounded-rationality relocation.
//!
//! A resident is content when both neighborhood fractions meet its
//! thresholds.  A discontent resident accepts a vacant candidate cell if
//!
//! - **(a)** the candidate meets both thresholds, or
//! - **(b)** the candidate strictly beats, on both fractions, the weaker of
//!   the current fraction and a floor: `τ_in` for the in-group fraction, and
//!   for the out-group fraction whatever [`OutGroupFloor`] selects.
//!
//! The model has always used `τ_in` as the out-group floor in (b).  That is
//! the default here; [`OutGroupFloor::OutGroupThreshold`] is the symmetric
//! variant and changes the dynamics.

use tip_agent::Resident;
use tip_core::CellId;

use crate::{Composition, MobilityPolicy, PolicyContext};

/// Which threshold bounds the out-group comparison of branch (b).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutGroupFloor {
    /// `min(out_cur, τ_in)`: the historical behavior.
    #[default]
    InGroupThreshold,
    /// `min(out_cur, τ_out)`.
    OutGroupThreshold,
}

/// The standard decision rule.  See the module docs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ThresholdPolicy {
    pub out_floor: OutGroupFloor,
}

impl ThresholdPolicy {
    pub fn new(out_floor: OutGroupFloor) -> Self {
        Self { out_floor }
    }
}

impl MobilityPolicy for ThresholdPolicy {
    fn is_current_spot_acceptable(&self, resident: &Resident, ctx: &PolicyContext<'_>) -> bool {
        let Some(home) = resident.home else {
            return false;
        };
        let here = Composition::around(home, resident.group, ctx);
        let t = resident.thresholds;
        here.in_fraction() >= t.in_group && here.out_fraction() >= t.out_group
    }

    fn is_candidate_spot_acceptable(
        &self,
        resident:  &Resident,
        candidate: CellId,
        ctx:       &PolicyContext<'_>,
    ) -> bool {
        if !ctx.population.occupancy.is_free(candidate) {
            return false;
        }
        let t = resident.thresholds;
        let there = Composition::around(candidate, resident.group, ctx);
        let (in_new, out_new) = (there.in_fraction(), there.out_fraction());

        if in_new >= t.in_group && out_new >= t.out_group {
            return true;
        }

        // An unplaced resident has no neighbors to compare against.
        let here = resident
            .home
            .map(|home| Composition::around(home, resident.group, ctx))
            .unwrap_or_default();
        let out_floor = match self.out_floor {
            OutGroupFloor::InGroupThreshold  => t.in_group,
            OutGroupFloor::OutGroupThreshold => t.out_group,
        };

        in_new > here.in_fraction().min(t.in_group) && out_new > here.out_fraction().min(out_floor)
    }
}

//! A policy under which nobody ever wants to move.

use tip_agent::Resident;
use tip_core::CellId;

use crate::{MobilityPolicy, PolicyContext};

/// Every resident is satisfied with its current home.
///
/// Useful as a control run: the final tie counts always equal the baseline.
pub struct ContentPolicy;

impl MobilityPolicy for ContentPolicy {
    fn is_current_spot_acceptable(&self, _resident: &Resident, _ctx: &PolicyContext<'_>) -> bool {
        true
    }

    fn is_candidate_spot_acceptable(
        &self,
        _resident:  &Resident,
        _candidate: CellId,
        _ctx:       &PolicyContext<'_>,
    ) -> bool {
        false
    }
}

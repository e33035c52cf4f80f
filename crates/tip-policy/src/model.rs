//! The `MobilityPolicy` trait: the pluggable decision rule.

use tip_agent::Resident;
use tip_core::CellId;

use crate::PolicyContext;

/// Decides whether a resident is content where it lives and whether a
/// candidate cell is worth moving to.
///
/// Both methods are pure: they read the context and return an answer.
/// `Send + Sync` so one policy value can be shared by runs executing on
/// different threads of a parameter sweep.
///
/// # Example
///
/// ```rust,ignore
/// struct NeverLeave;
///
/// impl MobilityPolicy for NeverLeave {
///     fn is_current_spot_acceptable(&self, _: &Resident, _: &PolicyContext<'_>) -> bool {
///         true
///     }
///     fn is_candidate_spot_acceptable(&self, _: &Resident, _: CellId, _: &PolicyContext<'_>) -> bool {
///         false
///     }
/// }
/// ```
pub trait MobilityPolicy: Send + Sync {
    /// `true` if `resident` is satisfied with its current home.
    fn is_current_spot_acceptable(
        &self,
        resident: &Resident,
        ctx:      &PolicyContext<'_>,
    ) -> bool;

    /// `true` if `resident` would move to `candidate`.
    ///
    /// Must be `false` whenever `candidate` is occupied.
    fn is_candidate_spot_acceptable(
        &self,
        resident:  &Resident,
        candidate: CellId,
        ctx:       &PolicyContext<'_>,
    ) -> bool;
}

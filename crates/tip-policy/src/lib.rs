//! `tip-policy`: whether a resident stays put, and where it would move.
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`composition`] | `Composition` (neighbor counts), `SMOOTHING`        |
//! | [`context`]     | `PolicyContext<'a>` (read-only lattice + population) |
//! | [`model`]       | `MobilityPolicy` trait                              |
//! | [`threshold`]   | `ThresholdPolicy`, `OutGroupFloor`                  |
//! | [`content`]     | `ContentPolicy` (nobody ever moves)                 |
//!
//! Policies are pure predicates.  A rejected candidate is an ordinary
//! `false`, never an error; the driver decides what to do with the answer.

pub mod composition;
pub mod content;
pub mod context;
pub mod model;
pub mod threshold;


pub use composition::{Composition, SMOOTHING};
pub use content::ContentPolicy;
pub use context::PolicyContext;
pub use model::MobilityPolicy;
pub use threshold::{OutGroupFloor, ThresholdPolicy};

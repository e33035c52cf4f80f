//! `tip-sim`: run driver for the tipping segregation simulator.
//!
//! # One run
//!
//! ```text
//! build:  validate config → build lattice → place groups in declared order
//!         → measure baseline ties
//! run:    repeat move_attempts times:
//!           ① draw a resident uniformly (with replacement)
//!           ② content with its spot?        → Content
//!           ③ draw one destination cell uniformly over all cells
//!           ④ policy accepts the destination → Moved, else Rejected
//!         → measure final ties
//! ```
//!
//! A seeded run is fully deterministic.  All run state lives in one
//! [`Simulation`]; nothing is global.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the independent runs of a sweep on Rayon's pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tip_sim::{GroupSpec, SimulationConfig, run_simulation};
//!
//! let config = SimulationConfig::new(15, 15)
//!     .group(GroupSpec::new("blue", 50, 0.5, 0.0))
//!     .group(GroupSpec::new("green", 50, 0.2, 0.0))
//!     .move_attempts(1_000)
//!     .seed(42);
//! let result = run_simulation(&config)?;
//! println!("{} moves, mixed ties {} → {}",
//!     result.successful_moves, result.baseline_ties.mixed, result.final_ties.mixed);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod sweep;


pub use builder::SimBuilder;
pub use config::{GroupSpec, SimulationConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{AttemptOutcome, Simulation, SimulationResult, run_simulation};
pub use sweep::{SweepPoint, SweepRow, SweepSpec, run_sweep};

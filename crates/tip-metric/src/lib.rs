//! `tip-metric`: how segregated is the grid right now?
//!
//! A *tie* is an edge of the lattice whose two endpoints are both occupied.
//! [`measure`] classifies every tie as same-group (counted per group) or
//! mixed.  Edges touching a vacant cell are not ties.
//!
//! | Module   | Contents                 |
//! |----------|--------------------------|
//! | [`ties`] | `TieCounts`, `measure`   |

pub mod ties;


pub use ties::{TieCounts, measure};

//! Terminal rendering of grids and tie counts.

use tip_agent::CellState;
use tip_core::{CellId, GroupId};
use tip_metric::TieCounts;
use tip_sim::GroupSpec;

const VACANT: char = '.';
const GLYPHS: [char; 8] = ['#', 'o', 'x', '+', '*', '@', '%', '&'];

/// Display character of `group`.
pub fn glyph(group: GroupId) -> char {
    GLYPHS[group.index() % GLYPHS.len()]
}

/// One line per grid row, one character per cell.
pub fn grid(cols: u32, cells: impl Iterator<Item = (CellId, CellState)>) -> String {
    let mut out = String::new();
    for (cell, state) in cells {
        out.push(match state {
            CellState::Vacant => VACANT,
            CellState::Occupied(g) => glyph(g),
        });
        if (cell.0 + 1) % cols == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out
}

pub fn legend(groups: &[GroupSpec]) -> String {
    let mut parts: Vec<String> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| format!("{} {}", glyph(GroupId(i as u16)), g.name))
        .collect();
    parts.push(format!("{VACANT} vacant"));
    parts.join("   ")
}

/// `blue 31 · green 40 · mixed 52 (42.6% mixed)`.
pub fn ties(groups: &[GroupSpec], ties: &TieCounts) -> String {
    let mut parts: Vec<String> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| format!("{} {}", g.name, ties.same(GroupId(i as u16))))
        .collect();
    parts.push(format!("mixed {}", ties.mixed));
    let fraction = match ties.mixed_fraction() {
        Some(f) => format!("{:.1}% mixed", f * 100.0),
        None => "no ties".to_owned(),
    };
    format!("{} ({fraction})", parts.join(" · "))
}

//! Unit tests for tip-grid.

#[cfg(test)]
mod helpers {
    use std::collections::BTreeSet;

    use tip_core::CellId;

    use crate::{Lattice, lattice_rule};

    /// Edge set from testing every pair of cells against the rule.
    pub fn pairwise_edges(rows: u32, cols: u32, diagonals: bool) -> BTreeSet<(CellId, CellId)> {
        let cells = rows * cols;
        let mut edges = BTreeSet::new();
        for a in 0..cells {
            for b in (a + 1)..cells {
                let dx = (a % cols).abs_diff(b % cols);
                let dy = (a / cols).abs_diff(b / cols);
                if lattice_rule(dx, dy, diagonals) {
                    edges.insert((CellId(a), CellId(b)));
                }
            }
        }
        edges
    }

    pub fn edge_set(lattice: &Lattice) -> BTreeSet<(CellId, CellId)> {
        lattice.edges().collect()
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use tip_core::{CellId, TipError};

    use crate::build_lattice;

    #[test]
    fn three_by_three_orthogonal() {
        let lat = build_lattice(3, 3, false).unwrap();
        assert_eq!(lat.cell_count(), 9);
        assert_eq!(lat.edge_count(), 12);

        assert_eq!(lat.degree(CellId(0)), 2); // corner
        assert_eq!(lat.degree(CellId(1)), 3); // edge
        assert_eq!(lat.degree(CellId(4)), 4); // center
        assert_eq!(lat.degree(CellId(8)), 2);
    }

    #[test]
    fn three_by_three_with_diagonals() {
        let lat = build_lattice(3, 3, true).unwrap();
        assert_eq!(lat.edge_count(), 20);
        assert_eq!(lat.degree(CellId(0)), 3);
        assert_eq!(lat.degree(CellId(1)), 5);
        assert_eq!(lat.degree(CellId(4)), 8);
    }

    #[test]
    fn neighbors_sorted_ascending() {
        let lat = build_lattice(4, 5, true).unwrap();
        for c in lat.cells() {
            let n = lat.neighbors(c);
            assert!(n.windows(2).all(|w| w[0] < w[1]), "{c}: {n:?}");
        }
        assert_eq!(
            lat.neighbors(CellId(6)),
            &[CellId(0), CellId(1), CellId(2), CellId(5), CellId(7), CellId(10), CellId(11), CellId(12)]
        );
    }

    #[test]
    fn rectangular_coords() {
        // 2 rows, 4 cols: id 5 is x=1, y=1.
        let lat = build_lattice(2, 4, false).unwrap();
        assert_eq!(lat.coords(CellId(5)), (1, 1));
        assert_eq!(lat.cell_at(1, 1), Some(CellId(5)));
        assert_eq!(lat.cell_at(4, 0), None);
        assert_eq!(lat.cell_at(0, 2), None);
    }

    #[test]
    fn single_cell_has_no_edges() {
        let lat = build_lattice(1, 1, true).unwrap();
        assert_eq!(lat.cell_count(), 1);
        assert_eq!(lat.edge_count(), 0);
        assert!(lat.neighbors(CellId(0)).is_empty());
    }

    #[test]
    fn single_row_is_a_path() {
        let lat = build_lattice(1, 5, true).unwrap();
        assert_eq!(lat.edge_count(), 4);
        assert_eq!(lat.neighbors(CellId(2)), &[CellId(1), CellId(3)]);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(build_lattice(0, 3, false), Err(TipError::InvalidConfiguration(_))));
        assert!(matches!(build_lattice(3, 0, true), Err(TipError::InvalidConfiguration(_))));
    }

    #[test]
    fn oversized_grid_rejected() {
        assert!(matches!(
            build_lattice(u32::MAX, u32::MAX, false),
            Err(TipError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn matches_pairwise_construction() {
        for (rows, cols) in [(1, 1), (1, 7), (3, 3), (6, 8), (8, 6), (5, 2)] {
            for diagonals in [false, true] {
                let lat = build_lattice(rows, cols, diagonals).unwrap();
                assert_eq!(
                    super::helpers::edge_set(&lat),
                    super::helpers::pairwise_edges(rows, cols, diagonals),
                    "{rows}x{cols} diagonals={diagonals}"
                );
            }
        }
    }
}

// ── Properties over arbitrary grids ───────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::build_lattice;

    proptest! {
        #[test]
        fn lattice_invariants(rows in 1u32..12, cols in 1u32..12, diagonals in any::<bool>()) {
            let lat = build_lattice(rows, cols, diagonals).unwrap();
            prop_assert_eq!(lat.cell_count(), (rows * cols) as usize);

            for (a, b) in lat.edges() {
                prop_assert!(a < b);
                let (xa, ya) = lat.coords(a);
                let (xb, yb) = lat.coords(b);
                let (dx, dy) = (xa.abs_diff(xb), ya.abs_diff(yb));
                let manhattan = dx + dy;
                if diagonals {
                    prop_assert!(manhattan == 1 || (dx.max(dy) == 1 && manhattan == 2));
                } else {
                    prop_assert_eq!(manhattan, 1);
                }
            }

            for c in lat.cells() {
                for &n in lat.neighbors(c) {
                    prop_assert_ne!(n, c, "self-loop at {}", c);
                    prop_assert!(lat.neighbors(n).contains(&c), "asymmetric edge {}-{}", c, n);
                }
            }

            prop_assert_eq!(lat.edges().count(), lat.edge_count());
        }

        #[test]
        fn equals_pairwise(rows in 1u32..9, cols in 1u32..9, diagonals in any::<bool>()) {
            let lat = build_lattice(rows, cols, diagonals).unwrap();
            prop_assert_eq!(
                super::helpers::edge_set(&lat),
                super::helpers::pairwise_edges(rows, cols, diagonals)
            );
        }
    }
}

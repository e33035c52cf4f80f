//! Unit tests for tip-agent.

#[cfg(test)]
mod helpers {
    use std::collections::HashSet;

    use tip_core::{GroupId, SimRng};

    use crate::{Population, Thresholds};

    /// `counts[g]` residents of group `g`, placed in group order.
    pub fn populated(cells: usize, counts: &[u32], seed: u64) -> Population {
        let mut pop = Population::new(cells, counts.len()).unwrap();
        let mut rng = SimRng::new(seed);
        for (g, &n) in counts.iter().enumerate() {
            for _ in 0..n {
                let id = pop.spawn(GroupId(g as u16), Thresholds::INDIFFERENT).unwrap();
                pop.place_random(id, &mut rng).unwrap();
            }
        }
        pop
    }

    /// Panics unless occupancy and resident homes agree exactly.
    pub fn assert_consistent(pop: &Population) {
        let mut seen = HashSet::new();
        for (cell, occupant) in pop.occupancy.iter() {
            if let Some(id) = occupant {
                assert!(seen.insert(id), "{id} occupies two cells");
                assert_eq!(pop.resident(id).unwrap().home, Some(cell));
            }
        }
        for r in pop.residents.iter() {
            if let Some(home) = r.home {
                assert_eq!(pop.occupancy.occupant(home), Some(r.id));
            }
        }
        let free: HashSet<_> = pop.occupancy.free_cells().iter().copied().collect();
        assert_eq!(free.len(), pop.occupancy.free_count());
        for (cell, occupant) in pop.occupancy.iter() {
            assert_eq!(free.contains(&cell), occupant.is_none(), "free set disagrees at {cell}");
        }
    }
}

// ── Thresholds & store ────────────────────────────────────────────────────────

#[cfg(test)]
mod resident {
    use tip_core::{GroupId, ResidentId, TipError};

    use crate::{Resident, ResidentStore, Thresholds};

    #[test]
    fn thresholds_validated() {
        assert!(Thresholds::new(0.0, 1.0).is_ok());
        assert!(matches!(Thresholds::new(1.2, 0.0), Err(TipError::InvalidConfiguration(_))));
        assert!(matches!(Thresholds::new(0.2, -0.1), Err(TipError::InvalidConfiguration(_))));
        assert!(Thresholds::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn new_resident_is_unplaced() {
        let r = Resident::new(ResidentId(0), GroupId(1), Thresholds::INDIFFERENT);
        assert_eq!(r.home, None);
    }

    #[test]
    fn store_assigns_sequential_ids() {
        let mut store = ResidentStore::new();
        let a = store.push(Resident::new(store.next_id(), GroupId(0), Thresholds::INDIFFERENT)).unwrap();
        let b = store.push(Resident::new(store.next_id(), GroupId(0), Thresholds::INDIFFERENT)).unwrap();
        assert_eq!((a, b), (ResidentId(0), ResidentId(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn store_rejects_out_of_sequence_id() {
        let mut store = ResidentStore::new();
        let r = Resident::new(ResidentId(5), GroupId(0), Thresholds::INDIFFERENT);
        assert!(store.push(r).is_err());
    }

    #[test]
    fn unknown_resident_is_an_error() {
        let store = ResidentStore::new();
        assert_eq!(store.get(ResidentId(3)).unwrap_err(), TipError::ResidentNotFound(ResidentId(3)));
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use tip_core::{CellId, GroupId, ResidentId, SimRng, TipError};

    use crate::{Occupancy, Resident, Thresholds};

    fn resident(id: u32) -> Resident {
        Resident::new(ResidentId(id), GroupId(0), Thresholds::INDIFFERENT)
    }

    #[test]
    fn fresh_occupancy_is_all_vacant() {
        let occ = Occupancy::new(6);
        assert_eq!(occ.free_count(), 6);
        assert_eq!(occ.occupied_count(), 0);
        assert!(occ.iter().all(|(_, o)| o.is_none()));
    }

    #[test]
    fn fills_grid_exactly_then_reports_capacity() {
        let mut occ = Occupancy::new(4);
        let mut rng = SimRng::new(1);
        let mut residents: Vec<Resident> = (0..5).map(resident).collect();
        for r in residents.iter_mut().take(4) {
            occ.place_random(r, &mut rng).unwrap();
        }
        assert_eq!(occ.free_count(), 0);
        let err = occ.place_random(&mut residents[4], &mut rng).unwrap_err();
        assert_eq!(err, TipError::CapacityExceeded { requested: 1, free: 0 });
        assert_eq!(residents[4].home, None);
    }

    #[test]
    fn cannot_place_twice() {
        let mut occ = Occupancy::new(4);
        let mut rng = SimRng::new(1);
        let mut r = resident(0);
        occ.place_random(&mut r, &mut rng).unwrap();
        assert_eq!(occ.place_random(&mut r, &mut rng), Err(TipError::AlreadyPlaced(ResidentId(0))));
        assert_eq!(occ.occupied_count(), 1);
    }

    #[test]
    fn placement_covers_every_cell() {
        // Over many seeds a single resident should land on each of 5 cells.
        let mut hit = [false; 5];
        for seed in 0..200 {
            let mut occ = Occupancy::new(5);
            let mut r = resident(0);
            let cell = occ.place_random(&mut r, &mut SimRng::new(seed)).unwrap();
            hit[cell.index()] = true;
        }
        assert!(hit.iter().all(|&h| h), "{hit:?}");
    }

    #[test]
    fn move_is_atomic() {
        let mut occ = Occupancy::new(3);
        let mut rng = SimRng::new(7);
        let mut r = resident(0);
        let from = occ.place_random(&mut r, &mut rng).unwrap();
        let to = CellId((from.0 + 1) % 3);

        occ.move_resident(&mut r, from, to).unwrap();
        assert_eq!(r.home, Some(to));
        assert_eq!(occ.occupant(to), Some(ResidentId(0)));
        assert!(occ.is_free(from));
        assert_eq!(occ.occupied_count(), 1);
        assert!(occ.free_cells().contains(&from));
        assert!(!occ.free_cells().contains(&to));
    }

    #[test]
    fn move_onto_occupied_cell_changes_nothing() {
        let mut occ = Occupancy::new(2);
        let mut rng = SimRng::new(0);
        let mut a = resident(0);
        let mut b = resident(1);
        let ca = occ.place_random(&mut a, &mut rng).unwrap();
        let cb = occ.place_random(&mut b, &mut rng).unwrap();

        let err = occ.move_resident(&mut a, ca, cb).unwrap_err();
        assert_eq!(err, TipError::CellOccupied { cell: cb, occupant: ResidentId(1) });
        assert!(err.is_invariant_violation());
        assert_eq!(a.home, Some(ca));
        assert_eq!(occ.occupant(ca), Some(ResidentId(0)));
        assert_eq!(occ.occupant(cb), Some(ResidentId(1)));
    }

    #[test]
    fn move_onto_own_cell_is_rejected() {
        let mut occ = Occupancy::new(2);
        let mut r = resident(0);
        let c = occ.place_random(&mut r, &mut SimRng::new(0)).unwrap();
        assert!(matches!(occ.move_resident(&mut r, c, c), Err(TipError::CellOccupied { .. })));
        assert_eq!(r.home, Some(c));
    }

    #[test]
    fn move_from_wrong_cell_is_rejected() {
        let mut occ = Occupancy::new(3);
        let mut r = resident(0);
        let c = occ.place_random(&mut r, &mut SimRng::new(0)).unwrap();
        let other = CellId((c.0 + 1) % 3);
        let third = CellId((c.0 + 2) % 3);
        assert_eq!(
            occ.move_resident(&mut r, other, third),
            Err(TipError::NotAtCell { resident: ResidentId(0), cell: other })
        );
    }

    #[test]
    fn move_off_grid_is_rejected() {
        let mut occ = Occupancy::new(2);
        let mut r = resident(0);
        let c = occ.place_random(&mut r, &mut SimRng::new(0)).unwrap();
        assert_eq!(
            occ.move_resident(&mut r, c, CellId(9)),
            Err(TipError::CellOutOfRange(CellId(9)))
        );
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use tip_core::{CellId, GroupId, ResidentId, SimRng, TipError};

    use crate::{CellState, Population, Thresholds};

    use super::helpers::{assert_consistent, populated};

    #[test]
    fn population_is_injective_and_counted() {
        let pop = populated(48, &[12, 12], 3);
        assert_eq!(pop.occupancy.occupied_count(), 24);
        assert_eq!(pop.len(), 24);
        assert!(pop.residents.iter().all(|r| r.home.is_some()));
        assert_consistent(&pop);
    }

    #[test]
    fn full_grid_population() {
        let pop = populated(9, &[4, 5], 11);
        assert_eq!(pop.occupancy.free_count(), 0);
        assert_consistent(&pop);
    }

    #[test]
    fn over_request_is_capacity_exceeded() {
        let mut pop = Population::new(3, 1).unwrap();
        let mut rng = SimRng::new(0);
        let mut last = Ok(CellId(0));
        for _ in 0..4 {
            let id = pop.spawn(GroupId(0), Thresholds::INDIFFERENT).unwrap();
            last = pop.place_random(id, &mut rng);
        }
        assert!(matches!(last, Err(TipError::CapacityExceeded { .. })));
        assert_consistent(&pop);
    }

    #[test]
    fn spawn_rejects_undeclared_group() {
        let mut pop = Population::new(4, 2).unwrap();
        assert!(matches!(
            pop.spawn(GroupId(2), Thresholds::INDIFFERENT),
            Err(TipError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn relocate_updates_both_sides() {
        let mut pop = populated(10, &[1, 1], 5);
        let id = ResidentId(0);
        let home = pop.resident(id).unwrap().home.unwrap();
        let target = *pop.occupancy.free_cells().first().unwrap();

        let left = pop.relocate(id, target).unwrap();
        assert_eq!(left, home);
        assert_eq!(pop.resident(id).unwrap().home, Some(target));
        assert_eq!(pop.group_at(target), Some(GroupId(0)));
        assert_eq!(pop.group_at(home), None);
        assert_consistent(&pop);
    }

    #[test]
    fn relocate_unplaced_resident_is_rejected() {
        let mut pop = Population::new(4, 1).unwrap();
        let id = pop.spawn(GroupId(0), Thresholds::INDIFFERENT).unwrap();
        assert_eq!(pop.relocate(id, CellId(1)), Err(TipError::NotPlaced(id)));
    }

    #[test]
    fn relocate_unknown_resident_is_rejected() {
        let mut pop = populated(4, &[1], 0);
        assert_eq!(
            pop.relocate(ResidentId(9), CellId(0)),
            Err(TipError::ResidentNotFound(ResidentId(9)))
        );
    }

    #[test]
    fn cell_states_report_vacancy_explicitly() {
        let pop = populated(6, &[2, 1], 8);
        let states: Vec<_> = pop.cell_states().collect();
        assert_eq!(states.len(), 6);
        assert_eq!(states.iter().filter(|(_, s)| *s == CellState::Vacant).count(), 3);
        assert_eq!(states.iter().filter(|(_, s)| s.group() == Some(GroupId(0))).count(), 2);
        assert_eq!(states.iter().filter(|(_, s)| s.group() == Some(GroupId(1))).count(), 1);
        for (i, (cell, _)) in states.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = populated(30, &[7, 8], 99);
        let b = populated(30, &[7, 8], 99);
        let homes = |p: &Population| p.residents.iter().map(|r| r.home).collect::<Vec<_>>();
        assert_eq!(homes(&a), homes(&b));
    }
}

#[cfg(test)]
mod explicit_placement {
    use tip_core::{CellId, GroupId, ResidentId, TipError};

    use crate::{Population, Thresholds};

    use super::helpers::assert_consistent;

    #[test]
    fn place_at_chosen_cells() {
        let mut pop = Population::new(4, 2).unwrap();
        let a = pop.spawn(GroupId(0), Thresholds::INDIFFERENT).unwrap();
        let b = pop.spawn(GroupId(1), Thresholds::INDIFFERENT).unwrap();
        pop.place_at(a, CellId(3)).unwrap();
        pop.place_at(b, CellId(0)).unwrap();
        assert_eq!(pop.group_at(CellId(3)), Some(GroupId(0)));
        assert_eq!(pop.group_at(CellId(0)), Some(GroupId(1)));
        assert_eq!(pop.occupancy.free_count(), 2);
        assert_consistent(&pop);
    }

    #[test]
    fn place_at_occupied_or_off_grid_fails() {
        let mut pop = Population::new(2, 1).unwrap();
        let a = pop.spawn(GroupId(0), Thresholds::INDIFFERENT).unwrap();
        let b = pop.spawn(GroupId(0), Thresholds::INDIFFERENT).unwrap();
        pop.place_at(a, CellId(1)).unwrap();
        assert_eq!(
            pop.place_at(b, CellId(1)),
            Err(TipError::CellOccupied { cell: CellId(1), occupant: ResidentId(0) })
        );
        assert_eq!(pop.place_at(b, CellId(2)), Err(TipError::CellOutOfRange(CellId(2))));
        assert_eq!(pop.resident(b).unwrap().home, None);
        assert_consistent(&pop);
    }
}

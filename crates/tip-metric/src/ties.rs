//! Tie counting over the lattice edge list.

use tip_agent::Population;
use tip_core::GroupId;
use tip_grid::Lattice;

/// Same-group ties per group, plus ties between different groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TieCounts {
    /// Indexed by `GroupId`; one slot per declared group.
    pub same_group: Vec<u64>,
    pub mixed:      u64,
}

impl TieCounts {
    /// All-zero counts for `group_count` groups.
    pub fn zeroed(group_count: usize) -> Self {
        Self { same_group: vec![0; group_count], mixed: 0 }
    }

    /// Same-group ties of `group`; `0` for an undeclared group.
    pub fn same(&self, group: GroupId) -> u64 {
        self.same_group.get(group.index()).copied().unwrap_or(0)
    }

    pub fn same_total(&self) -> u64 {
        self.same_group.iter().sum()
    }

    /// Every tie, same-group and mixed.
    pub fn total(&self) -> u64 {
        self.same_total() + self.mixed
    }

    /// `mixed / total`, `None` when there are no ties at all.
    pub fn mixed_fraction(&self) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.mixed as f64 / total as f64)
    }
}

/// Count the ties of `population` on `lattice`.
///
/// Each undirected edge is visited once.  O(edges).
pub fn measure(lattice: &Lattice, population: &Population) -> TieCounts {
    let mut counts = TieCounts::zeroed(population.group_count());
    for (a, b) in lattice.edges() {
        let (Some(ga), Some(gb)) = (population.group_at(a), population.group_at(b)) else {
            continue;
        };
        if ga == gb {
            counts.same_group[ga.index()] += 1;
        } else {
            counts.mixed += 1;
        }
    }
    counts
}

//! Run configuration, deserializable from TOML or any other serde format.

use serde::{Deserialize, Serialize};
use tip_agent::Thresholds;
use tip_core::{TipError, TipResult};
use tip_policy::OutGroupFloor;

/// One group of residents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Display name; also used by the CLI legend.
    pub name:          String,
    pub count:         usize,
    #[serde(default)]
    pub in_threshold:  f64,
    #[serde(default)]
    pub out_threshold: f64,
}

impl GroupSpec {
    pub fn new(name: impl Into<String>, count: usize, in_threshold: f64, out_threshold: f64) -> Self {
        Self { name: name.into(), count, in_threshold, out_threshold }
    }

    /// Validated thresholds for every resident of this group.
    pub fn thresholds(&self) -> TipResult<Thresholds> {
        Thresholds::new(self.in_threshold, self.out_threshold).map_err(|e| match e {
            TipError::InvalidConfiguration(msg) => {
                TipError::InvalidConfiguration(format!("group `{}`: {msg}", self.name))
            }
            other => other,
        })
    }
}

/// Everything needed to reproduce a run.
///
/// # TOML shape
///
/// ```toml
/// rows          = 15
/// cols          = 15
/// move_attempts = 1000
/// seed          = 42          # optional; omit for an entropy-seeded run
/// diagonals     = true        # default
/// out_floor     = "in_group_threshold"  # default
///
/// [[groups]]
/// name          = "blue"
/// count         = 50
/// in_threshold  = 0.5
/// out_threshold = 0.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows:          u32,
    pub cols:          u32,
    /// Populated in declared order; group `i` gets `GroupId(i)`.
    pub groups:        Vec<GroupSpec>,
    #[serde(default)]
    pub move_attempts: u64,
    #[serde(default = "default_diagonals")]
    pub diagonals:     bool,
    #[serde(default)]
    pub seed:          Option<u64>,
    #[serde(default)]
    pub out_floor:     OutGroupFloor,
}

fn default_diagonals() -> bool {
    true
}

impl SimulationConfig {
    /// Config with no groups, no attempts, diagonals on, and no seed.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            groups:        Vec::new(),
            move_attempts: 0,
            diagonals:     default_diagonals(),
            seed:          None,
            out_floor:     OutGroupFloor::default(),
        }
    }

    pub fn group(mut self, spec: GroupSpec) -> Self {
        self.groups.push(spec);
        self
    }

    pub fn move_attempts(mut self, n: u64) -> Self {
        self.move_attempts = n;
        self
    }

    pub fn diagonals(mut self, enabled: bool) -> Self {
        self.diagonals = enabled;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn out_floor(mut self, floor: OutGroupFloor) -> Self {
        self.out_floor = floor;
        self
    }

    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.cols as u64
    }

    /// Total residents across all groups, saturating at `usize::MAX`.
    pub fn resident_count(&self) -> usize {
        self.groups.iter().fold(0usize, |acc, g| acc.saturating_add(g.count))
    }

    /// Check everything that can be checked without building the run.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` for a zero dimension or a threshold outside
    ///   `[0, 1]`.
    /// - `CapacityExceeded` when the groups ask for more residents than the
    ///   grid has cells, including totals too large for `usize`.
    pub fn validate(&self) -> TipResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(TipError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        for group in &self.groups {
            group.thresholds()?;
        }
        let requested = self.resident_count();
        if requested as u64 > self.cell_count() {
            return Err(TipError::CapacityExceeded {
                requested,
                free: self.cell_count() as usize,
            });
        }
        Ok(())
    }
}

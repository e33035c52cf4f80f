//! The `Simulation` struct and its move-attempt loop.

use serde::Serialize;
use tip_agent::{CellState, Population};
use tip_core::{CellId, ResidentId, SimRng};
use tip_grid::Lattice;
use tip_metric::{TieCounts, measure};
use tip_policy::{MobilityPolicy, PolicyContext, ThresholdPolicy};
use tracing::{debug, info, trace};

use crate::{NoopObserver, SimBuilder, SimObserver, SimResult, SimulationConfig};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// What one move attempt did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// There are no residents to draw.
    Idle,
    /// The drawn resident accepts its current spot.
    Content { resident: ResidentId },
    /// The resident wanted to leave but turned the drawn cell down.
    Rejected { resident: ResidentId, candidate: CellId },
    Moved { resident: ResidentId, from: CellId, to: CellId },
}

impl AttemptOutcome {
    pub fn is_move(&self) -> bool {
        matches!(self, AttemptOutcome::Moved { .. })
    }
}

/// Ties before the first attempt and after the last, plus the move count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub baseline_ties:    TieCounts,
    pub final_ties:       TieCounts,
    pub successful_moves: u64,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// All state of one run.
///
/// Each attempt draws a resident uniformly at random (with replacement).  A
/// resident unhappy with its spot draws one destination uniformly over *all*
/// cells, which may be occupied or even its own home, and moves only if the
/// policy accepts that cell.
///
/// Create via [`SimBuilder`].
pub struct Simulation<P: MobilityPolicy = ThresholdPolicy> {
    pub config:     SimulationConfig,
    /// Fixed for the whole run.
    pub lattice:    Lattice,
    pub population: Population,
    pub policy:     P,

    rng:              SimRng,
    baseline:         TieCounts,
    attempts:         u64,
    successful_moves: u64,
}

impl<P: MobilityPolicy> Simulation<P> {
    pub(crate) fn new(
        config:     SimulationConfig,
        lattice:    Lattice,
        population: Population,
        policy:     P,
        rng:        SimRng,
        baseline:   TieCounts,
    ) -> Self {
        Self {
            config,
            lattice,
            population,
            policy,
            rng,
            baseline,
            attempts:         0,
            successful_moves: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Ties measured right after population.
    pub fn baseline(&self) -> &TieCounts {
        &self.baseline
    }

    /// Attempts made so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn successful_moves(&self) -> u64 {
        self.successful_moves
    }

    /// Ties of the grid as it is now.
    pub fn ties(&self) -> TieCounts {
        measure(&self.lattice, &self.population)
    }

    /// `(cell, state)` for every cell in id order.
    pub fn cell_states(&self) -> impl Iterator<Item = (CellId, CellState)> + '_ {
        self.population.cell_states()
    }

    /// Baseline, current ties, and moves so far.
    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            baseline_ties:    self.baseline.clone(),
            final_ties:       self.ties(),
            successful_moves: self.successful_moves,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Make the attempts left of `config.move_attempts` and measure the
    /// result.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimulationResult> {
        let remaining = self.config.move_attempts.saturating_sub(self.attempts);
        info!(attempts = remaining, "simulation started");

        observer.on_populated(&self.lattice, &self.population, &self.baseline);
        self.run_attempts(remaining, observer)?;

        let result = self.result();
        info!(
            moves          = result.successful_moves,
            baseline_mixed = result.baseline_ties.mixed,
            final_mixed    = result.final_ties.mixed,
            "simulation finished"
        );
        observer.on_finish(&self.lattice, &self.population, &result);
        Ok(result)
    }

    /// Make exactly `n` attempts, ignoring `config.move_attempts`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_attempts<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let attempt = self.attempts;
            let outcome = self.step()?;
            observer.on_attempt(attempt, &outcome);
        }
        Ok(())
    }

    /// Make one move attempt.
    ///
    /// # Errors
    ///
    /// Only on an internal invariant violation; a rejected move is
    /// [`AttemptOutcome::Rejected`], not an error.
    pub fn step(&mut self) -> SimResult<AttemptOutcome> {
        self.attempts += 1;

        let Some(slot) = self.rng.index_below(self.population.len()) else {
            return Ok(AttemptOutcome::Idle);
        };
        let resident = &self.population.residents.as_slice()[slot];
        let id = resident.id;
        let ctx = PolicyContext::new(&self.lattice, &self.population);

        if self.policy.is_current_spot_acceptable(resident, &ctx) {
            return Ok(AttemptOutcome::Content { resident: id });
        }

        // `build_lattice` never yields an empty grid.
        let candidate = CellId(self.rng.gen_range(0..self.lattice.cell_count() as u32));
        if !self.policy.is_candidate_spot_acceptable(resident, candidate, &ctx) {
            trace!(resident = %id, %candidate, "move rejected");
            return Ok(AttemptOutcome::Rejected { resident: id, candidate });
        }

        let from = self.population.relocate(id, candidate)?;
        self.successful_moves += 1;
        debug!(resident = %id, %from, to = %candidate, "moved");
        Ok(AttemptOutcome::Moved { resident: id, from, to: candidate })
    }
}

/// Build, populate, and run `config` to completion.
pub fn run_simulation(config: &SimulationConfig) -> SimResult<SimulationResult> {
    SimBuilder::new(config.clone()).build()?.run(&mut NoopObserver)
}

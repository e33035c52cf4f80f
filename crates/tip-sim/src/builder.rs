//! Fluent builder for constructing a [`Simulation`].

use tip_agent::Population;
use tip_core::{GroupId, SimRng};
use tip_grid::build_lattice;
use tip_metric::measure;
use tip_policy::{MobilityPolicy, ThresholdPolicy};
use tracing::info;

use crate::{SimResult, Simulation, SimulationConfig};

/// Fluent builder for [`Simulation<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                             |
/// |---------------|-----------------------------------------------------|
/// | `.policy(p)`  | `ThresholdPolicy::new(config.out_floor)`            |
/// | `.rng(r)`     | `SimRng::new(seed)`, or entropy when `seed` is None |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .policy(ContentPolicy)
///     .build()?;
/// let result = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: MobilityPolicy = ThresholdPolicy> {
    config: SimulationConfig,
    policy: P,
    rng:    Option<SimRng>,
}

impl SimBuilder<ThresholdPolicy> {
    pub fn new(config: SimulationConfig) -> Self {
        let policy = ThresholdPolicy::new(config.out_floor);
        Self { config, policy, rng: None }
    }
}

impl<P: MobilityPolicy> SimBuilder<P> {
    /// Replace the decision rule.
    pub fn policy<Q: MobilityPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder { config: self.config, policy, rng: self.rng }
    }

    /// Supply the run's random stream, overriding `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the config, build the lattice, place every resident, and
    /// record the baseline ties.
    ///
    /// Groups are populated in declared order, one resident at a time, each
    /// on a uniformly random vacant cell.
    pub fn build(self) -> SimResult<Simulation<P>> {
        let config = self.config;
        config.validate()?;

        let lattice = build_lattice(config.rows, config.cols, config.diagonals)?;
        let mut rng = match self.rng {
            Some(rng) => rng,
            None => config.seed.map_or_else(SimRng::from_entropy, SimRng::new),
        };

        let mut population = Population::for_lattice(&lattice, config.groups.len())?;
        // `Population::new` rejects more groups than `GroupId` can number.
        for (g, spec) in config.groups.iter().enumerate() {
            let group = GroupId(g as u16);
            let thresholds = spec.thresholds()?;
            for _ in 0..spec.count {
                let id = population.spawn(group, thresholds)?;
                population.place_random(id, &mut rng)?;
            }
        }

        let baseline = measure(&lattice, &population);
        info!(
            rows      = config.rows,
            cols      = config.cols,
            residents = population.len(),
            groups    = config.groups.len(),
            seed      = ?config.seed,
            "grid populated"
        );

        Ok(Simulation::new(config, lattice, population, self.policy, rng, baseline))
    }
}

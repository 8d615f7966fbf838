//! Solver trait and configuration.

use crate::error::Error;
use crate::geometry::Building;
use crate::result::PlanResult;
use crate::windowed_sweep::SweepConfig;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Candidate-generation strategy.
///
/// Strategies run in the order they are listed in [`Config::strategies`];
/// when two strategies reach the same cost, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// All negative-weight buildings, padded with the lightest others up to `k`.
    NegativeFirst,
    /// Lightest `k`, then probe a few more negative-weight buildings one at a time.
    GreedyThenProbe,
    /// Exactly the lightest `k` buildings.
    LowestKByWeight,
    /// Sliding windows over x-sorted, then y-sorted buildings.
    WindowedSweep,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 4] = [
        Strategy::NegativeFirst,
        Strategy::GreedyThenProbe,
        Strategy::LowestKByWeight,
        Strategy::WindowedSweep,
    ];

    /// Short, stable name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NegativeFirst => "negative-first",
            Self::GreedyThenProbe => "greedy-then-probe",
            Self::LowestKByWeight => "lowest-k-by-weight",
            Self::WindowedSweep => "windowed-sweep",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Strategies to run, in order.
    pub strategies: Vec<Strategy>,

    /// How many buildings past the first `k` the greedy probe considers.
    pub probe_lookahead: usize,

    /// Windowed sweep parameters.
    pub sweep: SweepConfig,

    /// Run strategies on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            probe_lookahead: 10,
            sweep: SweepConfig::default(),
            parallel: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the weight-ordered strategies (no spatial sweep).
    pub fn heuristics_only() -> Self {
        Self::new().with_strategies(vec![
            Strategy::NegativeFirst,
            Strategy::GreedyThenProbe,
            Strategy::LowestKByWeight,
        ])
    }

    /// Only the windowed sweep.
    pub fn sweep_only() -> Self {
        Self::new().with_strategies(vec![Strategy::WindowedSweep])
    }

    /// Sets the strategies to run.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Sets the greedy probe lookahead.
    pub fn with_probe_lookahead(mut self, lookahead: usize) -> Self {
        self.probe_lookahead = lookahead;
        self
    }

    /// Sets the windowed sweep parameters.
    pub fn with_sweep(mut self, sweep: SweepConfig) -> Self {
        self.sweep = sweep;
        self
    }

    /// Enables or disables parallel strategy execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Checks that a subset of at least `min_required` buildings can exist.
///
/// # Errors
/// Returns [`Error::InvalidConfig`] if `min_required` is zero or exceeds the
/// number of buildings.
pub fn validate_instance(num_buildings: usize, min_required: usize) -> Result<()> {
    if min_required == 0 {
        return Err(Error::InvalidConfig(
            "k must be at least 1".to_string(),
        ));
    }
    if min_required > num_buildings {
        return Err(Error::InvalidConfig(format!(
            "k = {} exceeds the number of buildings ({})",
            min_required, num_buildings
        )));
    }
    Ok(())
}

/// Trait for zoning solvers.
pub trait Solver {
    /// Finds a low-cost rectangle enclosing at least `min_required` buildings.
    fn solve(&self, buildings: &[Building], min_required: usize) -> Result<PlanResult>;
}

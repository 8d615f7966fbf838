//! Plan result representation.

use crate::geometry::{Point2D, Rectangle};
use crate::solver::Strategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-strategy counters collected during a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrategyStats {
    /// Strategy these counters belong to.
    pub strategy: Strategy,
    /// Subsets emitted by the generator.
    pub candidates_emitted: u64,
    /// Emitted subsets large enough to be scored.
    pub candidates_evaluated: u64,
    /// Best cost this strategy found on its own.
    pub best_cost: Option<f64>,
    /// Strict improvements within this strategy.
    pub improvements: usize,
}

impl StrategyStats {
    /// Creates empty counters for `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            candidates_emitted: 0,
            candidates_evaluated: 0,
            best_cost: None,
            improvements: 0,
        }
    }
}

/// Result of a zoning search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResult {
    /// Lowest cost found.
    pub cost: f64,

    /// Rectangle achieving `cost`.
    pub rectangle: Rectangle,

    /// Indices of the enclosed subset that produced `cost`.
    pub selected: Vec<usize>,

    /// Strategy that produced the result (`None` for the full-set fallback
    /// and for the exhaustive solver).
    pub strategy: Option<Strategy>,

    /// Per-strategy counters, in execution order.
    pub stats: Vec<StrategyStats>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl PlanResult {
    /// Creates a result with no statistics attached.
    pub fn new(cost: f64, rectangle: Rectangle, selected: Vec<usize>) -> Self {
        Self {
            cost,
            rectangle,
            selected,
            strategy: None,
            stats: Vec::new(),
            computation_time_ms: 0,
        }
    }

    /// Sets the winning strategy.
    pub fn with_strategy(mut self, strategy: Option<Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the per-strategy statistics.
    pub fn with_stats(mut self, stats: Vec<StrategyStats>) -> Self {
        self.stats = stats;
        self
    }

    /// Sets the computation time.
    pub fn with_computation_time(mut self, ms: u64) -> Self {
        self.computation_time_ms = ms;
        self
    }

    /// The rectangle's four edges, starting at `(minX,minY)`.
    pub fn edges(&self) -> [(Point2D, Point2D); 4] {
        self.rectangle.edges()
    }

    /// Number of enclosed buildings in the winning subset.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Total candidates scored across strategies.
    pub fn total_evaluated(&self) -> u64 {
        self.stats.iter().map(|s| s.candidates_evaluated).sum()
    }

    /// Winning strategy name, or `"full-set"` when none of them produced a candidate.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.map_or("full-set", |s| s.name())
    }
}

/// Flat digest of a [`PlanResult`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Best cost.
    pub cost: f64,
    /// Rectangle perimeter.
    pub perimeter: f64,
    /// Number of enclosed buildings.
    pub selected: usize,
    /// Candidates scored.
    pub evaluated: u64,
    /// Winning strategy name.
    pub strategy: String,
    /// Computation time in milliseconds.
    pub time_ms: u64,
}

impl From<&PlanResult> for PlanSummary {
    fn from(result: &PlanResult) -> Self {
        Self {
            cost: result.cost,
            perimeter: result.rectangle.perimeter(),
            selected: result.selected_count(),
            evaluated: result.total_evaluated(),
            strategy: result.strategy_name().to_string(),
            time_ms: result.computation_time_ms,
        }
    }
}

//! Zone planner: runs the configured strategies and keeps the best candidate.

use crate::evaluator::Evaluator;
use crate::geometry::Building;
use crate::result::{PlanResult, StrategyStats};
use crate::solver::{validate_instance, Config, Solver, Strategy};
use crate::strategy::CandidateGenerator;
use crate::tracker::BestResult;
use crate::Result;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of running one strategy on its own tracker.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    /// Best candidate this strategy found.
    pub best: BestResult,
    /// Counters for this strategy.
    pub stats: StrategyStats,
}

/// Heuristic zone planner.
///
/// Each strategy runs on its own [`BestResult`]. The runs are then folded
/// into one tracker in configuration order under the strict-improvement
/// rule. This yields the same winner as feeding every candidate into a
/// single tracker in sequence, so the sequential and parallel modes agree.
#[derive(Debug, Clone)]
pub struct ZonePlanner {
    config: Config,
}

impl ZonePlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a planner with the default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs a single generator and scores everything it emits.
    pub fn run_generator(
        generator: &dyn CandidateGenerator,
        buildings: &[Building],
        min_required: usize,
    ) -> StrategyRun {
        let eval = Evaluator::new(buildings, min_required);
        let mut best = BestResult::new();
        let mut stats = StrategyStats::new(generator.strategy());

        generator.generate(buildings, min_required, &mut |subset| {
            stats.candidates_emitted += 1;
            if eval.evaluate(subset, &mut best).is_some() {
                stats.candidates_evaluated += 1;
            }
        });

        stats.best_cost = best.final_result().map(|(cost, _)| cost);
        stats.improvements = best.improvements();

        log::debug!(
            "{}: emitted={}, evaluated={}, best={:?}",
            stats.strategy,
            stats.candidates_emitted,
            stats.candidates_evaluated,
            stats.best_cost
        );

        StrategyRun { best, stats }
    }

    fn run_all(
        &self,
        generators: &[Box<dyn CandidateGenerator>],
        buildings: &[Building],
        min_required: usize,
    ) -> Vec<StrategyRun> {
        if self.config.parallel {
            return Self::run_parallel(generators, buildings, min_required);
        }

        generators
            .iter()
            .map(|g| Self::run_generator(g.as_ref(), buildings, min_required))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_parallel(
        generators: &[Box<dyn CandidateGenerator>],
        buildings: &[Building],
        min_required: usize,
    ) -> Vec<StrategyRun> {
        // Indexed collect keeps configuration order for the merge.
        generators
            .par_iter()
            .map(|g| Self::run_generator(g.as_ref(), buildings, min_required))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel(
        generators: &[Box<dyn CandidateGenerator>],
        buildings: &[Building],
        min_required: usize,
    ) -> Vec<StrategyRun> {
        log::warn!("parallel execution requested but the `parallel` feature is disabled");
        generators
            .iter()
            .map(|g| Self::run_generator(g.as_ref(), buildings, min_required))
            .collect()
    }
}

impl Default for ZonePlanner {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for ZonePlanner {
    fn solve(&self, buildings: &[Building], min_required: usize) -> Result<PlanResult> {
        validate_instance(buildings.len(), min_required)?;
        let start = Instant::now();

        let generators: Vec<Box<dyn CandidateGenerator>> = self
            .config
            .strategies
            .iter()
            .map(|s| s.generator(&self.config))
            .collect();

        let runs = self.run_all(&generators, buildings, min_required);

        let mut best = BestResult::new();
        let mut winner: Option<Strategy> = None;
        let mut stats = Vec::with_capacity(runs.len());
        for run in runs {
            if best.merge(&run.best) {
                winner = Some(run.stats.strategy);
            }
            stats.push(run.stats);
        }

        if best.is_empty() {
            log::warn!(
                "no strategy produced a subset of size >= {}; evaluating all {} buildings",
                min_required,
                buildings.len()
            );
            let all: Vec<usize> = (0..buildings.len()).collect();
            // Evaluable: validate_instance guarantees 1 <= k <= n.
            let _ = Evaluator::new(buildings, min_required).evaluate(&all, &mut best);
        }

        let elapsed = start.elapsed().as_millis() as u64;
        let (cost, rectangle) = best.final_result().ok_or_else(|| {
            crate::Error::InvalidConfig("no evaluable subset of the input exists".to_string())
        })?;

        log::info!(
            "zone plan: cost={:.6}, selected={}, strategy={}, time={}ms",
            cost,
            best.selected().len(),
            winner.map_or("full-set", |s| s.name()),
            elapsed
        );

        Ok(PlanResult::new(cost, rectangle, best.selected().to_vec())
            .with_strategy(winner)
            .with_stats(stats)
            .with_computation_time(elapsed))
    }
}

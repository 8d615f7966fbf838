//! Exhaustive solver for small instances.
//!
//! Enumerates every subset of size ≥ k by bitmask and returns the true
//! minimum. The work grows as `2^n`, so inputs are capped at
//! [`ExactConfig::max_items`] points. Intended for cross-checking the
//! heuristic planner and for reporting its optimality gap on small inputs.
//!
//! # Example
//!
//! ```
//! use u_zoning_core::exact::{solve_exhaustive, ExactConfig};
//! use u_zoning_core::geometry::buildings_from_triples;
//!
//! let buildings = buildings_from_triples(&[
//!     (0.0, 0.0, 1.0),
//!     (10.0, 0.0, 1.0),
//!     (0.0, 10.0, -5.0),
//!     (10.0, 10.0, 1.0),
//! ]);
//! let exact = solve_exhaustive(&buildings, 2, &ExactConfig::default()).unwrap();
//! assert_eq!(exact.cost, 16.0);
//! ```

use crate::error::Error;
use crate::evaluator::Evaluator;
use crate::geometry::{Building, Rectangle};
use crate::result::PlanResult;
use crate::solver::{validate_instance, Solver};
use crate::tracker::BestResult;
use crate::Result;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard ceiling on `max_items`; masks are `u32`.
const MAX_EXACT_ITEMS: usize = 30;

/// Configuration for the exhaustive solver.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactConfig {
    /// Largest instance accepted.
    pub max_items: usize,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self { max_items: 20 }
    }
}

impl ExactConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the largest instance accepted (clamped to `1..=30`).
    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max.clamp(1, MAX_EXACT_ITEMS);
        self
    }

    /// Check if the number of buildings is within the exhaustive limit.
    pub fn is_within_limit(&self, num_items: usize) -> bool {
        num_items <= self.max_items.min(MAX_EXACT_ITEMS)
    }
}

/// Optimal subset found by exhaustive enumeration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExactResult {
    /// Minimum cost over all subsets of size ≥ k.
    pub cost: f64,
    /// Rectangle of the optimal subset.
    pub rectangle: Rectangle,
    /// Optimal subset, ascending indices.
    pub subset: Vec<usize>,
    /// Number of subsets scored.
    pub subsets_examined: u64,
}

impl ExactResult {
    /// Relative gap of `heuristic_cost` above the optimum (0.0 = optimal).
    pub fn gap(&self, heuristic_cost: f64) -> f64 {
        let diff = heuristic_cost - self.cost;
        if self.cost.abs() > f64::EPSILON {
            diff / self.cost.abs()
        } else {
            diff
        }
    }
}

/// Finds the minimum-cost subset of size ≥ `min_required` by brute force.
///
/// Subsets are visited in increasing mask order; ties keep the first one.
///
/// # Errors
/// Returns [`Error::InvalidConfig`] for an unsatisfiable `min_required`, and
/// [`Error::TooLarge`] when `buildings` exceeds the configured limit.
pub fn solve_exhaustive(
    buildings: &[Building],
    min_required: usize,
    config: &ExactConfig,
) -> Result<ExactResult> {
    validate_instance(buildings.len(), min_required)?;
    let n = buildings.len();
    if !config.is_within_limit(n) {
        return Err(Error::TooLarge {
            items: n,
            limit: config.max_items.min(MAX_EXACT_ITEMS),
        });
    }

    let eval = Evaluator::new(buildings, min_required);
    let mut best = BestResult::new();
    let mut subset = Vec::with_capacity(n);
    let mut examined = 0u64;

    for mask in 1u32..(1u32 << n) {
        if (mask.count_ones() as usize) < min_required {
            continue;
        }
        subset.clear();
        subset.extend((0..n).filter(|&i| mask & (1 << i) != 0));
        if eval.evaluate(&subset, &mut best).is_some() {
            examined += 1;
        }
    }

    let (cost, rectangle) = best
        .final_result()
        .ok_or_else(|| Error::InvalidConfig("no subset of the required size".to_string()))?;

    log::debug!(
        "exhaustive search: n={}, k={}, examined={}, cost={:.6}",
        n,
        min_required,
        examined,
        cost
    );

    Ok(ExactResult {
        cost,
        rectangle,
        subset: best.selected().to_vec(),
        subsets_examined: examined,
    })
}

/// [`Solver`] adapter over [`solve_exhaustive`].
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    config: ExactConfig,
}

impl ExhaustiveSolver {
    /// Creates a solver with the given limits.
    pub fn new(config: ExactConfig) -> Self {
        Self { config }
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(&self, buildings: &[Building], min_required: usize) -> Result<PlanResult> {
        let start = Instant::now();
        let exact = solve_exhaustive(buildings, min_required, &self.config)?;
        Ok(PlanResult::new(exact.cost, exact.rectangle, exact.subset)
            .with_computation_time(start.elapsed().as_millis() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::buildings_from_triples;

    fn square_with_hole() -> Vec<Building> {
        buildings_from_triples(&[
            (0.0, 0.0, 1.0),
            (10.0, 0.0, 1.0),
            (0.0, 10.0, -5.0),
            (10.0, 10.0, 1.0),
        ])
    }

    #[test]
    fn test_square_with_hole_optimum() {
        let exact = solve_exhaustive(&square_with_hole(), 2, &ExactConfig::default()).unwrap();
        assert_eq!(exact.cost, 16.0);
        // {0, 2} (mask 0b0101) comes before the tied {2, 3} (mask 0b1100).
        assert_eq!(exact.subset, vec![0, 2]);
        // C(4,2) + C(4,3) + C(4,4)
        assert_eq!(exact.subsets_examined, 11);
    }

    #[test]
    fn test_k_equals_n_examines_one_subset() {
        let exact = solve_exhaustive(&square_with_hole(), 4, &ExactConfig::default()).unwrap();
        assert_eq!(exact.subsets_examined, 1);
        assert_eq!(exact.cost, 38.0);
    }

    #[test]
    fn test_too_large() {
        let triples: Vec<(f64, f64, f64)> = (0..8).map(|i| (i as f64, 0.0, 1.0)).collect();
        let buildings = buildings_from_triples(&triples);
        let config = ExactConfig::new().with_max_items(5);

        assert!(matches!(
            solve_exhaustive(&buildings, 2, &config),
            Err(Error::TooLarge { items: 8, limit: 5 })
        ));
    }

    #[test]
    fn test_invalid_k() {
        assert!(matches!(
            solve_exhaustive(&square_with_hole(), 0, &ExactConfig::default()),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_gap() {
        let exact = solve_exhaustive(&square_with_hole(), 2, &ExactConfig::default()).unwrap();
        assert_eq!(exact.gap(16.0), 0.0);
        assert!((exact.gap(20.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_solver_adapter() {
        let result = ExhaustiveSolver::default()
            .solve(&square_with_hole(), 2)
            .unwrap();
        assert_eq!(result.cost, 16.0);
        assert_eq!(result.strategy, None);
    }

    #[test]
    fn test_config_clamp() {
        assert_eq!(ExactConfig::new().with_max_items(0).max_items, 1);
        assert_eq!(ExactConfig::new().with_max_items(100).max_items, 30);
        assert!(ExactConfig::default().is_within_limit(20));
        assert!(!ExactConfig::default().is_within_limit(21));
    }
}

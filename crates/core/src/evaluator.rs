//! Subset scoring.
//!
//! The cost of a subset `S` is the perimeter of its bounding rectangle plus
//! the sum of the weights of the buildings in `S`:
//!
//! ```text
//! cost(S) = 2 * ((maxX - minX) + (maxY - minY)) + Σ weight[i]
//! ```
//!
//! Subsets smaller than the required minimum are never scored.

use crate::geometry::{Building, Rectangle};
use crate::tracker::BestResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Figures computed for one evaluable subset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Score {
    /// `perimeter + weight_sum`.
    pub cost: f64,
    /// Perimeter of the bounding rectangle.
    pub perimeter: f64,
    /// Sum of enclosed weights.
    pub weight_sum: f64,
    /// Bounding rectangle of the subset.
    pub rectangle: Rectangle,
}

/// Scores subsets of a fixed building set against a minimum size.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    buildings: &'a [Building],
    min_required: usize,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `buildings` requiring at least `min_required` members.
    pub fn new(buildings: &'a [Building], min_required: usize) -> Self {
        Self {
            buildings,
            min_required,
        }
    }

    /// The building set being scored.
    pub fn buildings(&self) -> &'a [Building] {
        self.buildings
    }

    /// Minimum subset size.
    pub fn min_required(&self) -> usize {
        self.min_required
    }

    /// Returns true if `subset` is large enough to be scored.
    pub fn is_evaluable(&self, subset: &[usize]) -> bool {
        !subset.is_empty() && subset.len() >= self.min_required
    }

    /// Scores `subset` in a single pass without touching any tracker.
    ///
    /// Returns `None` for subsets smaller than the minimum (or empty).
    pub fn score(&self, subset: &[usize]) -> Option<Score> {
        if !self.is_evaluable(subset) {
            return None;
        }
        debug_assert!(
            subset.iter().all(|&i| i < self.buildings.len()),
            "subset index out of range"
        );

        let first = &self.buildings[subset[0]];
        let mut rectangle = Rectangle::new(first.x, first.y, first.x, first.y);
        let mut weight_sum = 0.0;
        for &idx in subset {
            let b = &self.buildings[idx];
            rectangle.expand_to(b.position());
            weight_sum += b.weight;
        }

        let perimeter = rectangle.perimeter();
        Some(Score {
            cost: perimeter + weight_sum,
            perimeter,
            weight_sum,
            rectangle,
        })
    }

    /// Scores `subset` and offers it to `tracker`.
    ///
    /// The tracker keeps the candidate only on a strict improvement, so the
    /// first subset reaching a given cost wins ties.
    pub fn evaluate(&self, subset: &[usize], tracker: &mut BestResult) -> Option<Score> {
        let score = self.score(subset)?;
        tracker.offer(&score, subset);
        Some(score)
    }
}

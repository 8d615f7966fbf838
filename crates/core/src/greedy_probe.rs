//! Greedy baseline with a short negative-weight probe.
//!
//! Starts from the `k` lightest buildings and walks the next few in weight
//! order. Each negative-weight building is appended only if doing so strictly
//! lowers the cost of the set built so far. A decision is never revisited.

use crate::evaluator::Evaluator;
use crate::geometry::Building;
use crate::solver::Strategy;
use crate::strategy::{indices_by_weight, CandidateGenerator};

/// Generator for [`Strategy::GreedyThenProbe`].
#[derive(Debug, Clone, Copy)]
pub struct GreedyThenProbe {
    lookahead: usize,
}

impl GreedyThenProbe {
    /// Creates a generator probing `lookahead` buildings past the first `k`.
    pub fn new(lookahead: usize) -> Self {
        Self { lookahead }
    }

    /// Probe depth.
    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    /// Builds the single candidate subset.
    pub fn subset(&self, buildings: &[Building], min_required: usize) -> Vec<usize> {
        let order = indices_by_weight(buildings);
        let base = min_required.min(order.len());
        let mut chosen: Vec<usize> = order[..base].to_vec();

        // Scores are compared on sets that already hold at least `base` members.
        let eval = Evaluator::new(buildings, base.max(1));
        let mut current = match eval.score(&chosen) {
            Some(score) => score.cost,
            None => return chosen,
        };

        let end = order.len().min(base + self.lookahead);
        for &candidate in &order[base..end] {
            if !buildings[candidate].is_negative() {
                continue;
            }
            chosen.push(candidate);
            match eval.score(&chosen) {
                Some(score) if score.cost < current => current = score.cost,
                _ => {
                    chosen.pop();
                }
            }
        }

        chosen
    }
}

impl Default for GreedyThenProbe {
    fn default() -> Self {
        Self::new(10)
    }
}

impl CandidateGenerator for GreedyThenProbe {
    fn strategy(&self) -> Strategy {
        Strategy::GreedyThenProbe
    }

    fn generate(
        &self,
        buildings: &[Building],
        min_required: usize,
        emit: &mut dyn FnMut(&[usize]),
    ) {
        let subset = self.subset(buildings, min_required);
        if !subset.is_empty() {
            emit(&subset);
        }
    }
}

//! Candidate generation.
//!
//! Each [`Strategy`] is backed by a [`CandidateGenerator`] that proposes index
//! subsets of the building set. Generators only read the buildings and emit
//! subsets to a sink; scoring and best-result bookkeeping happen elsewhere.
//!
//! Every emitted subset holds distinct indices in `0..n`. Generators may emit
//! subsets smaller than `k`; the evaluator discards those.

use crate::geometry::Building;
use crate::greedy_probe::GreedyThenProbe;
use crate::lowest_k::LowestKByWeight;
use crate::negative_first::NegativeFirst;
use crate::solver::{Config, Strategy};
use crate::windowed_sweep::WindowedSweep;
use std::cmp::Ordering;

/// Proposes candidate subsets for one strategy.
pub trait CandidateGenerator: Send + Sync {
    /// The strategy this generator implements.
    fn strategy(&self) -> Strategy;

    /// Emits candidate subsets, in a deterministic order, to `emit`.
    fn generate(
        &self,
        buildings: &[Building],
        min_required: usize,
        emit: &mut dyn FnMut(&[usize]),
    );

    /// Collects every emitted subset.
    fn candidates(&self, buildings: &[Building], min_required: usize) -> Vec<Vec<usize>> {
        let mut out = Vec::new();
        self.generate(buildings, min_required, &mut |subset| out.push(subset.to_vec()));
        out
    }
}

impl Strategy {
    /// Builds the generator for this strategy from `config`.
    pub fn generator(&self, config: &Config) -> Box<dyn CandidateGenerator> {
        match self {
            Self::NegativeFirst => Box::new(NegativeFirst),
            Self::GreedyThenProbe => Box::new(GreedyThenProbe::new(config.probe_lookahead)),
            Self::LowestKByWeight => Box::new(LowestKByWeight),
            Self::WindowedSweep => Box::new(WindowedSweep::new(config.sweep.clone())),
        }
    }
}

/// Indices of `buildings` stably sorted ascending by `key`.
///
/// Buildings with equal keys keep their input order.
pub(crate) fn indices_sorted_by<F>(buildings: &[Building], key: F) -> Vec<usize>
where
    F: Fn(&Building) -> f64,
{
    let mut order: Vec<usize> = (0..buildings.len()).collect();
    sort_indices_by(&mut order, buildings, key);
    order
}

/// Stably sorts `indices` ascending by `key` of the referenced buildings.
pub(crate) fn sort_indices_by<F>(indices: &mut [usize], buildings: &[Building], key: F)
where
    F: Fn(&Building) -> f64,
{
    indices.sort_by(|&a, &b| compare(key(&buildings[a]), key(&buildings[b])));
}

fn compare(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Indices sorted ascending by weight.
pub(crate) fn indices_by_weight(buildings: &[Building]) -> Vec<usize> {
    indices_sorted_by(buildings, |b| b.weight)
}

#[cfg(test)]
pub(crate) fn assert_valid_subset(subset: &[usize], n: usize) {
    let mut seen = vec![false; n];
    for &i in subset {
        assert!(i < n, "index {} out of range (n = {})", i, n);
        assert!(!seen[i], "duplicate index {}", i);
        seen[i] = true;
    }
}

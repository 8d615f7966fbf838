//! Negative-weight-first candidate.
//!
//! Encloses every building with a negative weight, on the assumption that
//! each one lowers the weight sum by more than it grows the perimeter. The
//! assumption is not guaranteed; it is one heuristic among several. When
//! fewer than `k` negatives exist, the lightest non-negative buildings fill
//! the remaining slots.

use crate::geometry::Building;
use crate::solver::Strategy;
use crate::strategy::{indices_by_weight, CandidateGenerator};

/// Generator for [`Strategy::NegativeFirst`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeFirst;

impl NegativeFirst {
    /// Builds the single candidate subset.
    pub fn subset(buildings: &[Building], min_required: usize) -> Vec<usize> {
        let mut chosen: Vec<usize> = buildings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_negative())
            .map(|(i, _)| i)
            .collect();

        if chosen.len() >= min_required {
            return chosen;
        }

        let padding = indices_by_weight(buildings)
            .into_iter()
            .filter(|&i| !buildings[i].is_negative())
            .take(min_required - chosen.len());
        chosen.extend(padding);
        chosen
    }
}

impl CandidateGenerator for NegativeFirst {
    fn strategy(&self) -> Strategy {
        Strategy::NegativeFirst
    }

    fn generate(
        &self,
        buildings: &[Building],
        min_required: usize,
        emit: &mut dyn FnMut(&[usize]),
    ) {
        if buildings.is_empty() {
            return;
        }
        emit(&Self::subset(buildings, min_required));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::buildings_from_triples;
    use crate::strategy::assert_valid_subset;

    #[test]
    fn test_enough_negatives_returns_all_of_them() {
        let buildings = buildings_from_triples(&[
            (0.0, 0.0, -1.0),
            (1.0, 0.0, 5.0),
            (2.0, 0.0, -3.0),
            (3.0, 0.0, -0.5),
        ]);
        // More negatives than k: all are kept, not just k of them.
        assert_eq!(NegativeFirst::subset(&buildings, 2), vec![0, 2, 3]);
    }

    #[test]
    fn test_pads_with_lightest_non_negative() {
        let buildings = buildings_from_triples(&[
            (0.0, 0.0, 9.0),
            (1.0, 0.0, -2.0),
            (2.0, 0.0, 0.0),
            (3.0, 0.0, 4.0),
        ]);
        assert_eq!(NegativeFirst::subset(&buildings, 3), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_negatives_is_lowest_k() {
        let buildings = buildings_from_triples(&[
            (0.0, 0.0, 3.0),
            (1.0, 0.0, 1.0),
            (2.0, 0.0, 2.0),
        ]);
        assert_eq!(NegativeFirst::subset(&buildings, 2), vec![1, 2]);
    }

    #[test]
    fn test_k_equals_n() {
        let buildings = buildings_from_triples(&[
            (0.0, 0.0, 3.0),
            (1.0, 0.0, -1.0),
            (2.0, 0.0, 2.0),
        ]);
        let subset = NegativeFirst::subset(&buildings, 3);
        assert_eq!(subset.len(), 3);
        assert_valid_subset(&subset, 3);
    }

    #[test]
    fn test_emits_exactly_one_candidate() {
        let buildings = buildings_from_triples(&[(0.0, 0.0, 1.0), (1.0, 1.0, 1.0)]);
        assert_eq!(NegativeFirst.candidates(&buildings, 1).len(), 1);
        assert!(NegativeFirst.candidates(&[], 1).is_empty());
    }
}

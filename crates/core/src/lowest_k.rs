//! Lowest-weight baseline.

use crate::geometry::Building;
use crate::solver::Strategy;
use crate::strategy::{indices_by_weight, CandidateGenerator};

/// Generator for [`Strategy::LowestKByWeight`]: the `k` lightest buildings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestKByWeight;

impl CandidateGenerator for LowestKByWeight {
    fn strategy(&self) -> Strategy {
        Strategy::LowestKByWeight
    }

    fn generate(
        &self,
        buildings: &[Building],
        min_required: usize,
        emit: &mut dyn FnMut(&[usize]),
    ) {
        let order = indices_by_weight(buildings);
        let take = min_required.min(order.len());
        if take > 0 {
            emit(&order[..take]);
        }
    }
}

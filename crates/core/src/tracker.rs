//! Best-result tracking.

use crate::evaluator::Score;
use crate::geometry::Rectangle;

/// Holds the lowest cost seen so far and the rectangle that produced it.
///
/// Starts at `+∞` with no rectangle and only ever moves down: a candidate
/// replaces the current best only when its cost is strictly lower.
#[derive(Debug, Clone)]
pub struct BestResult {
    cost: f64,
    rectangle: Option<Rectangle>,
    selected: Vec<usize>,
    improvements: usize,
}

impl BestResult {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            cost: f64::INFINITY,
            rectangle: None,
            selected: Vec::new(),
            improvements: 0,
        }
    }

    /// Records `(cost, rectangle)` if it beats the current best.
    ///
    /// Returns true if the tracker changed. The recorded subset is cleared,
    /// since no indices come with a bare `(cost, rectangle)`; use
    /// [`offer`](Self::offer) to keep them.
    pub fn record_if_better(&mut self, cost: f64, rectangle: Rectangle) -> bool {
        if cost < self.cost {
            self.cost = cost;
            self.rectangle = Some(rectangle);
            self.selected.clear();
            self.improvements += 1;
            true
        } else {
            false
        }
    }

    /// Records a scored subset, keeping a copy of its indices on improvement.
    pub fn offer(&mut self, score: &Score, subset: &[usize]) -> bool {
        let improved = self.record_if_better(score.cost, score.rectangle);
        if improved {
            self.selected.extend_from_slice(subset);
        }
        improved
    }

    /// Folds another tracker's best into this one under the same strict rule.
    pub fn merge(&mut self, other: &BestResult) -> bool {
        match other.rectangle {
            Some(rect) if self.record_if_better(other.cost, rect) => {
                self.selected.clone_from(&other.selected);
                true
            }
            _ => false,
        }
    }

    /// Current best cost (`+∞` until something is recorded).
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Current best rectangle.
    pub fn rectangle(&self) -> Option<&Rectangle> {
        self.rectangle.as_ref()
    }

    /// Indices of the subset that produced the current best.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Number of strict improvements recorded.
    pub fn improvements(&self) -> usize {
        self.improvements
    }

    /// True until the first candidate is recorded.
    pub fn is_empty(&self) -> bool {
        self.rectangle.is_none()
    }

    /// The final `(cost, rectangle)`, if any candidate was recorded.
    pub fn final_result(&self) -> Option<(f64, Rectangle)> {
        self.rectangle.map(|r| (self.cost, r))
    }
}

impl Default for BestResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f64) -> Rectangle {
        Rectangle::new(0.0, 0.0, w, 0.0)
    }

    #[test]
    fn test_starts_empty() {
        let tracker = BestResult::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.cost(), f64::INFINITY);
        assert!(tracker.final_result().is_none());
        assert_eq!(tracker.improvements(), 0);
    }

    #[test]
    fn test_monotonic() {
        let mut tracker = BestResult::new();
        let costs = [5.0, 7.0, 3.0, 3.0, 4.0, -1.0];
        let mut history = Vec::new();

        for (i, &c) in costs.iter().enumerate() {
            tracker.record_if_better(c, rect(i as f64));
            history.push(tracker.cost());
        }

        assert!(history.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(tracker.cost(), -1.0);
        assert_eq!(tracker.improvements(), 3);
    }

    #[test]
    fn test_tie_keeps_first() {
        let mut tracker = BestResult::new();
        assert!(tracker.record_if_better(2.0, rect(1.0)));
        assert!(!tracker.record_if_better(2.0, rect(9.0)));
        assert_eq!(tracker.rectangle(), Some(&rect(1.0)));
    }

    #[test]
    fn test_bare_record_drops_stale_subset() {
        let score = Score {
            cost: 5.0,
            perimeter: 4.0,
            weight_sum: 1.0,
            rectangle: rect(2.0),
        };
        let mut tracker = BestResult::new();
        assert!(tracker.offer(&score, &[3, 1]));
        assert_eq!(tracker.selected(), &[3, 1]);

        assert!(tracker.record_if_better(1.0, rect(1.0)));
        assert!(tracker.selected().is_empty());
        assert_eq!(tracker.final_result(), Some((1.0, rect(1.0))));

        assert!(!tracker.record_if_better(9.0, rect(4.0)));
        assert!(tracker.selected().is_empty());
    }

    #[test]
    fn test_merge_respects_order() {
        let mut first = BestResult::new();
        first.record_if_better(4.0, rect(1.0));
        let mut second = BestResult::new();
        second.record_if_better(4.0, rect(2.0));
        let mut third = BestResult::new();
        third.record_if_better(1.0, rect(3.0));

        let mut global = BestResult::new();
        assert!(global.merge(&first));
        assert!(!global.merge(&second));
        assert!(!global.merge(&BestResult::new()));
        assert_eq!(global.rectangle(), Some(&rect(1.0)));
        assert!(global.merge(&third));
        assert_eq!(global.final_result(), Some((1.0, rect(3.0))));
    }
}

//! Output formatting.
//!
//! The text format is one line with the cost, then one `x1 y1 x2 y2` line
//! per rectangle edge, all with six decimals. With the `serde` feature a
//! JSON report carrying the same data plus the input buildings is available.

use crate::result::PlanResult;
use std::fmt::Write as _;

#[cfg(feature = "serde")]
use crate::geometry::Building;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Renders `result` in the plain text format.
pub fn format_text(result: &PlanResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:.6}", result.cost);
    for (a, b) in result.edges() {
        let _ = writeln!(out, "{:.6} {:.6} {:.6} {:.6}", a.x, a.y, b.x, b.y);
    }
    out
}

/// A building as it appears in the JSON report.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize)]
pub struct BuildingRecord {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Weight.
    pub weight: f64,
}

/// JSON view of a plan: cost, edges as point pairs, and the input buildings.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// Best cost.
    pub cost: f64,
    /// Four edges as `[[x1, y1], [x2, y2]]`.
    pub rectangle: Vec<[[f64; 2]; 2]>,
    /// Input buildings.
    pub buildings: Vec<BuildingRecord>,
    /// Number of enclosed buildings in the winning subset.
    pub selected: usize,
    /// Winning strategy name.
    pub strategy: String,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
    /// The plain text rendering.
    pub raw_output: String,
}

#[cfg(feature = "serde")]
impl JsonReport {
    /// Builds a report for `result` over `buildings`.
    pub fn new(result: &PlanResult, buildings: &[Building]) -> Self {
        Self {
            cost: result.cost,
            rectangle: result
                .edges()
                .iter()
                .map(|(a, b)| [[a.x, a.y], [b.x, b.y]])
                .collect(),
            buildings: buildings
                .iter()
                .map(|b| BuildingRecord {
                    x: b.x,
                    y: b.y,
                    weight: b.weight,
                })
                .collect(),
            selected: result.selected_count(),
            strategy: result.strategy_name().to_string(),
            computation_time_ms: result.computation_time_ms,
            raw_output: format_text(result).trim_end().to_string(),
        }
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

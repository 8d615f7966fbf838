//! # U-Zoning Core
//!
//! Heuristic rectangle zoning: choose at least `k` weighted points
//! ("buildings") to enclose in an axis-aligned rectangle so that
//!
//! ```text
//! cost = perimeter(bounding rectangle) + Σ enclosed weights
//! ```
//!
//! is as small as possible. Trying every subset is infeasible, so the
//! planner runs several fast strategies and keeps the best result found.
//! The result is best-effort, not a proven optimum.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Point2D`], [`Building`], [`Rectangle`]
//! - **Evaluator**: [`Evaluator`] scores subsets; [`BestResult`] tracks the minimum
//! - **Strategies**: [`CandidateGenerator`] implementations, one per [`Strategy`]
//! - **Planner**: [`ZonePlanner`] runs the configured strategies ([`Solver`] trait)
//! - **Exact**: [`exact::solve_exhaustive`] for small cross-check instances
//!
//! ## Strategies
//!
//! | Strategy | Candidates | Description |
//! |----------|------------|-------------|
//! | `NegativeFirst` | 1 | Every negative weight, padded with the lightest others |
//! | `GreedyThenProbe` | 1 | Lightest `k`, then a short probe of negative weights |
//! | `LowestKByWeight` | 1 | Lightest `k` |
//! | `WindowedSweep` | many | x-windows re-sorted by y, strided inner windows |
//!
//! ## Quick Start
//!
//! ```rust
//! use u_zoning_core::{buildings_from_triples, Config, Solver, ZonePlanner};
//!
//! let buildings = buildings_from_triples(&[
//!     (0.0, 0.0, 1.0),
//!     (10.0, 0.0, 1.0),
//!     (0.0, 10.0, -5.0),
//!     (10.0, 10.0, 1.0),
//! ]);
//!
//! let planner = ZonePlanner::new(Config::default());
//! let result = planner.solve(&buildings, 2).unwrap();
//! assert_eq!(result.cost, 16.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization for configuration and results, plus the JSON report
//! - `parallel`: Run strategies on the rayon thread pool

pub mod error;
pub mod evaluator;
pub mod exact;
pub mod geometry;
pub mod greedy_probe;
pub mod lowest_k;
pub mod negative_first;
pub mod parser;
pub mod planner;
pub mod report;
pub mod result;
pub mod solver;
pub mod strategy;
pub mod tracker;
pub mod windowed_sweep;

// Re-exports
pub use error::{Error, Result};
pub use evaluator::{Evaluator, Score};
pub use exact::{ExactConfig, ExactResult, ExhaustiveSolver};
pub use geometry::{buildings_from_triples, Building, Point2D, Rectangle};
pub use greedy_probe::GreedyThenProbe;
pub use lowest_k::LowestKByWeight;
pub use negative_first::NegativeFirst;
pub use parser::{parse_reader, parse_str, ZoneInput};
pub use planner::{StrategyRun, ZonePlanner};
pub use report::format_text;
#[cfg(feature = "serde")]
pub use report::JsonReport;
pub use result::{PlanResult, PlanSummary, StrategyStats};
pub use solver::{validate_instance, Config, Solver, Strategy};
pub use strategy::CandidateGenerator;
pub use tracker::BestResult;
pub use windowed_sweep::{SweepConfig, WindowedSweep};

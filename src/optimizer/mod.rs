//! Route planning pipeline.
//!
//! - [`RouteOptimizer`]: Validates input, clusters, assigns, solves, and summarizes
//! - [`RouteSolver`]: Nearest neighbor plus 2-opt over condition-adjusted distances
//! - [`summarize`]: Fleet totals, efficiency score, and savings estimate

mod config;
#[allow(clippy::module_inception)]
mod optimizer;
mod solver;
mod summary;

pub use config::{OptimizationOptions, OptimizerConfig, SummaryParams};
pub use optimizer::{optimize_routes, RouteOptimizer};
pub use solver::RouteSolver;
pub use summary::{advisory_notes, efficiency, fleet_totals, savings, summarize};

//! Real-world friction model applied to plain distances.
//!
//! - [`ConditionTables`]: Static peak-hour, rainy-season, and multiplier tables
//! - [`PlanningClock`] / [`ConditionContext`]: Injected time and modelling flags
//! - [`ConditionAdjuster`]: Computes the effective distance of a segment

mod adjuster;
mod context;
mod tables;

pub use adjuster::{ConditionAdjuster, InsecureArea, NoInsecureAreas};
pub use context::{ConditionContext, PlanningClock};
pub use tables::ConditionTables;

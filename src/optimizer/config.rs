//! Optimizer configuration and per-call options.

use serde::{Deserialize, Serialize};

use crate::assignment::AssignmentPolicy;
use crate::conditions::ConditionTables;
use crate::evaluation::EvaluationParams;

/// Per-call switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationOptions {
    /// Apply peak-hour traffic factors.
    pub include_traffic: bool,
    /// Apply rainy-season factors.
    pub include_weather: bool,
    /// Match clusters to vehicles in descending priority order.
    pub prioritize_expedited: bool,
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self {
            include_traffic: true,
            include_weather: true,
            prioritize_expedited: true,
        }
    }
}

/// Parameters of the fleet-level summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryParams {
    /// Average orders per route that scores 100.
    pub target_orders_per_route: f64,
    /// Fraction of total distance saved versus an unoptimized plan.
    pub distance_saving: f64,
    /// Fraction of total time saved versus an unoptimized plan.
    pub duration_saving: f64,
    /// Fraction of total fuel cost saved versus an unoptimized plan.
    pub fuel_saving: f64,
    /// Kilograms of CO₂ emitted per kilometer driven.
    pub co2_kg_per_km: f64,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            target_orders_per_route: 10.0,
            distance_saving: 0.15,
            duration_saving: 0.20,
            fuel_saving: 0.15,
            co2_kg_per_km: 2.3,
        }
    }
}

/// Static configuration of a [`RouteOptimizer`](super::RouteOptimizer).
///
/// Every field has a default, so partial JSON documents deserialize.
/// [`RouteOptimizer::optimize`](super::RouteOptimizer::optimize) rejects
/// out-of-range values through
/// [`validate_config`](crate::error::validate_config).
///
/// # Examples
///
/// ```
/// use wildebeest_routing::optimizer::OptimizerConfig;
///
/// let config = OptimizerConfig::default().with_cluster_radius_km(3.0);
/// assert_eq!(config.cluster_radius_km, 3.0);
/// assert_eq!(config.assignment.van_max_weight_kg, 500.0);
/// assert!(config.parallel_solve);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Seed-to-member radius for grouping regular orders.
    pub cluster_radius_km: f64,
    pub conditions: ConditionTables,
    pub assignment: AssignmentPolicy,
    pub evaluation: EvaluationParams,
    pub summary: SummaryParams,
    /// Solve routes on the rayon thread pool.
    pub parallel_solve: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            cluster_radius_km: 5.0,
            conditions: ConditionTables::default(),
            assignment: AssignmentPolicy::default(),
            evaluation: EvaluationParams::default(),
            summary: SummaryParams::default(),
            parallel_solve: true,
        }
    }
}

impl OptimizerConfig {
    /// Sets the clustering radius.
    pub fn with_cluster_radius_km(mut self, radius: f64) -> Self {
        self.cluster_radius_km = radius;
        self
    }

    /// Replaces the condition tables.
    pub fn with_conditions(mut self, tables: ConditionTables) -> Self {
        self.conditions = tables;
        self
    }

    /// Sets the fuel price per litre.
    pub fn with_fuel_price(mut self, price: f64) -> Self {
        self.evaluation.fuel_price_per_litre = price;
        self
    }

    /// Enables or disables parallel route solving.
    pub fn with_parallel_solve(mut self, on: bool) -> Self {
        self.parallel_solve = on;
        self
    }
}

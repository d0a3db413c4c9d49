//! End-to-end planning: validate, cluster, assign, solve, summarize.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::assignment::assign_vehicles;
use crate::clustering::cluster_orders;
use crate::conditions::{ConditionAdjuster, ConditionContext, InsecureArea, PlanningClock};
use crate::error::{validate_clock, validate_config, validate_inputs, ValidationError};
use crate::models::{DeliveryOrder, OptimizedRoute, RouteOptimizationResult, Vehicle};

use super::summary::{advisory_notes, summarize};
use super::{OptimizationOptions, OptimizerConfig, RouteSolver};

/// Stateless route planner over an immutable configuration.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::conditions::PlanningClock;
/// use wildebeest_routing::models::*;
/// use wildebeest_routing::optimizer::{OptimizationOptions, OptimizerConfig, RouteOptimizer};
///
/// let depot = Coordinate::new(-1.2833, 36.8167);
/// let orders = vec![
///     DeliveryOrder::new("o1", Coordinate::new(-1.2900, 36.8200), Priority::Medium, 40.0, 0.5),
///     DeliveryOrder::new("o2", Coordinate::new(-1.2950, 36.8250), Priority::Low, 60.0, 0.8),
/// ];
/// let vehicles = vec![
///     Vehicle::new("van-1", "drv-1", VehicleClass::Van, Capacity::new(500.0, 10.0), depot, 9.0),
/// ];
/// let clock = PlanningClock::fixed("2024-07-01T11:00:00Z".parse().unwrap(), 11, 7);
///
/// let optimizer = RouteOptimizer::new(OptimizerConfig::default());
/// let result = optimizer
///     .optimize(&orders, &vehicles, &OptimizationOptions::default(), &clock)
///     .unwrap();
/// assert_eq!(result.num_routes(), 1);
/// assert_eq!(result.num_served(), 2);
/// assert_eq!(result.routes[0].vehicle_id, "van-1");
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
    adjuster: ConditionAdjuster,
}

impl RouteOptimizer {
    /// Creates an optimizer that treats every area as secure.
    pub fn new(config: OptimizerConfig) -> Self {
        let adjuster = ConditionAdjuster::new(config.conditions.clone());
        Self { config, adjuster }
    }

    /// Replaces the insecure-area predicate used at night.
    pub fn with_insecure_area<P>(mut self, predicate: P) -> Self
    where
        P: InsecureArea + 'static,
    {
        self.adjuster = self.adjuster.with_insecure_area(predicate);
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Plans routes for the given orders and vehicles.
    ///
    /// Fails only on invalid input, configuration, or clock. Clusters that no available vehicle can
    /// take are reported in [`RouteOptimizationResult::unserved_orders`].
    pub fn optimize(
        &self,
        orders: &[DeliveryOrder],
        vehicles: &[Vehicle],
        options: &OptimizationOptions,
        clock: &PlanningClock,
    ) -> Result<RouteOptimizationResult, ValidationError> {
        validate_config(&self.config)?;
        validate_clock(clock)?;
        validate_inputs(orders, vehicles)?;

        let available = vehicles.iter().filter(|v| match v.availability() {
            Some(window) if !window.contains(clock.now) => {
                debug!(vehicle = v.id(), "vehicle unavailable at planning time");
                false
            }
            _ => true,
        });

        let clusters = cluster_orders(orders, self.config.cluster_radius_km);
        let outcome = assign_vehicles(
            clusters,
            available,
            &self.config.assignment,
            options.prioritize_expedited,
        );

        let context = ConditionContext {
            include_traffic: options.include_traffic,
            include_weather: options.include_weather,
            hour: clock.hour,
            month: clock.month,
        };
        let solver = RouteSolver::new(
            &self.adjuster,
            context,
            &self.config.evaluation,
            clock.now,
        );

        let routes: Vec<OptimizedRoute> = if self.config.parallel_solve {
            outcome
                .assignments
                .par_iter()
                .map(|a| solver.solve(a))
                .collect()
        } else {
            outcome.assignments.iter().map(|a| solver.solve(a)).collect()
        };

        let unserved = outcome.unserved_order_ids();
        let notes = advisory_notes(&self.config.conditions, clock, options, unserved.len());
        let result = summarize(routes, orders.len(), unserved, notes, &self.config.summary);

        info!(
            orders = orders.len(),
            vehicles = vehicles.len(),
            routes = result.num_routes(),
            unserved = result.num_unserved(),
            distance_km = result.totals.distance_km,
            duration_minutes = result.totals.duration_minutes,
            fuel_cost = result.totals.fuel_cost,
            "optimized routes"
        );

        Ok(result)
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

/// Plans routes with the default configuration at the current system time.
pub fn optimize_routes(
    orders: &[DeliveryOrder],
    vehicles: &[Vehicle],
    options: &OptimizationOptions,
) -> Result<RouteOptimizationResult, ValidationError> {
    RouteOptimizer::default().optimize(orders, vehicles, options, &PlanningClock::system())
}

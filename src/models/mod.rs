//! Domain model types for delivery route planning.
//!
//! Provides the core abstractions: delivery orders with priorities and
//! time windows, vehicles with class and capacity, solved routes as ordered
//! waypoint sequences, and the fleet-level result of a planning run.

mod location;
mod order;
mod route;
mod solution;
mod vehicle;

pub use location::Coordinate;
pub use order::{DeliveryOrder, Priority, TimeWindow};
pub use route::{OptimizedRoute, RouteTheme, Waypoint};
pub use solution::{
    Efficiency, EfficiencyRating, FleetTotals, RouteOptimizationResult, SavingsEstimate,
};
pub use vehicle::{Capacity, Vehicle, VehicleClass};

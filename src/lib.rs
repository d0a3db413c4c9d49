//! # wildebeest-routing
//!
//! Delivery route planning for a mixed fleet of two-wheelers, vans, and
//! trucks under local traffic, weather, and security conditions.
//!
//! A planning run groups orders into geographic clusters, matches each
//! cluster to one vehicle, orders the stops with nearest neighbor and
//! 2-opt over condition-adjusted distances, then reports per-route and
//! fleet-level metrics.
//!
//! ## Modules
//!
//! - [`models`]: Orders, vehicles, routes, and the planning result
//! - [`distance`]: Great-circle distance and dense distance matrices
//! - [`conditions`]: Traffic, weather, vehicle, and night-security multipliers
//! - [`clustering`]: Expedited isolation and seed-radius grouping
//! - [`assignment`]: Priority-ordered cluster-to-vehicle matching
//! - [`constructive`]: Nearest neighbor tour construction
//! - [`local_search`]: Open-path 2-opt improvement
//! - [`evaluation`]: Waypoint timing, fuel cost, and route themes
//! - [`optimizer`]: The end-to-end pipeline and fleet summary
//! - [`error`]: Input validation
//!
//! ## Example
//!
//! ```
//! use wildebeest_routing::conditions::PlanningClock;
//! use wildebeest_routing::models::*;
//! use wildebeest_routing::optimizer::{OptimizationOptions, RouteOptimizer};
//!
//! let depot = Coordinate::new(-1.2833, 36.8167);
//! let orders = vec![
//!     DeliveryOrder::new("urgent", Coordinate::new(-1.2850, 36.8180), Priority::Expedited, 3.0, 0.1),
//!     DeliveryOrder::new("bulk", Coordinate::new(-1.3700, 36.8167), Priority::Low, 800.0, 6.0),
//! ];
//! let vehicles = vec![
//!     Vehicle::new("bike-1", "amani", VehicleClass::TwoWheeler, Capacity::new(20.0, 1.0), depot, 35.0),
//!     Vehicle::new("truck-1", "wanjiru", VehicleClass::Truck, Capacity::new(1500.0, 30.0), depot, 5.0),
//! ];
//!
//! let clock = PlanningClock::fixed("2024-02-12T10:00:00Z".parse().unwrap(), 13, 2);
//! let result = RouteOptimizer::default()
//!     .optimize(&orders, &vehicles, &OptimizationOptions::default(), &clock)
//!     .unwrap();
//!
//! assert_eq!(result.num_routes(), 2);
//! assert_eq!(result.routes[0].vehicle_id, "bike-1");
//! assert_eq!(result.routes[1].vehicle_id, "truck-1");
//! ```

pub mod assignment;
pub mod clustering;
pub mod conditions;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod optimizer;

pub use error::ValidationError;
pub use optimizer::{optimize_routes, RouteOptimizer};

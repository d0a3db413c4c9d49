//! Waypoint and solved-route types.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A single stop within a solved route.
///
/// The first waypoint of every route is the vehicle's start position and has
/// no `order_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Stop location.
    pub location: Coordinate,
    /// Order served at this stop, `None` for the depot.
    pub order_id: Option<String>,
    /// Estimated arrival time.
    pub estimated_arrival: Timestamp,
    /// On-site service duration in minutes.
    pub service_minutes: f64,
    /// Arrival falls after the order's time window.
    pub late: bool,
}

/// Descriptive label attached to each route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTheme {
    /// Carries an expedited order.
    Sprint,
    /// Served by a two-wheeler.
    Agility,
    /// More than the migration stop threshold.
    Migration,
    /// Longer than the long-haul distance threshold.
    LongHaul,
    StandardPatrol,
}

impl RouteTheme {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            RouteTheme::Sprint => "Cheetah Sprint",
            RouteTheme::Agility => "Gazelle Agility",
            RouteTheme::Migration => "Great Migration",
            RouteTheme::LongHaul => "Elephant Long-Haul",
            RouteTheme::StandardPatrol => "Standard Patrol",
        }
    }
}

impl fmt::Display for RouteTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The solved route for one vehicle.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::models::{OptimizedRoute, RouteTheme};
///
/// let route = OptimizedRoute::new("van-1", "driver-1");
/// assert!(route.is_empty());
/// assert_eq!(route.theme, RouteTheme::StandardPatrol);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedRoute {
    pub vehicle_id: String,
    pub driver_id: String,
    /// Order ids in visit order.
    pub order_ids: Vec<String>,
    /// Depot first, then one waypoint per order.
    pub waypoints: Vec<Waypoint>,
    pub total_distance_km: f64,
    /// Travel plus service time, in minutes.
    pub total_duration_minutes: f64,
    pub fuel_cost: f64,
    pub theme: RouteTheme,
    /// Orders whose estimated arrival misses their time window.
    pub late_orders: Vec<String>,
}

impl OptimizedRoute {
    /// Creates an empty route for the given vehicle and driver.
    pub fn new(vehicle_id: impl Into<String>, driver_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            driver_id: driver_id.into(),
            order_ids: Vec::new(),
            waypoints: Vec::new(),
            total_distance_km: 0.0,
            total_duration_minutes: 0.0,
            fuel_cost: 0.0,
            theme: RouteTheme::StandardPatrol,
            late_orders: Vec::new(),
        }
    }

    /// Number of orders served (excluding the depot).
    pub fn len(&self) -> usize {
        self.order_ids.len()
    }

    /// Returns `true` if the route serves no orders.
    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }
}

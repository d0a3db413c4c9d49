//! Greedy cluster-to-vehicle assignment.
//!
//! # Algorithm
//!
//! Clusters are visited in descending priority (expedited, high, medium,
//! low; ties keep cluster order). For each, the preferred vehicle class is
//! derived from its contents:
//!
//! - an expedited order, or a total weight within the two-wheeler limit:
//!   two-wheeler
//! - a total weight within the van limit: van
//! - otherwise: truck
//!
//! The first still-available vehicle of that class whose capacity holds the
//! cluster's total weight and volume is taken out of the pool. If none
//! exists the cluster is left unassigned; there is no fallback to another
//! class.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clustering::Cluster;
use crate::models::{Vehicle, VehicleClass};

/// Weight limits that pick a cluster's vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentPolicy {
    /// Clusters up to this weight go to a two-wheeler.
    pub two_wheeler_max_weight_kg: f64,
    /// Clusters up to this weight go to a van; heavier ones to a truck.
    pub van_max_weight_kg: f64,
}

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self {
            two_wheeler_max_weight_kg: 20.0,
            van_max_weight_kg: 500.0,
        }
    }
}

impl AssignmentPolicy {
    /// The vehicle class a cluster must be served by.
    pub fn preferred_class(&self, cluster: &Cluster<'_>) -> VehicleClass {
        let weight = cluster.total_weight_kg();
        if cluster.has_expedited() || weight <= self.two_wheeler_max_weight_kg {
            VehicleClass::TwoWheeler
        } else if weight <= self.van_max_weight_kg {
            VehicleClass::Van
        } else {
            VehicleClass::Truck
        }
    }
}

/// A cluster paired with the vehicle that will serve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<'a> {
    pub cluster: Cluster<'a>,
    pub vehicle: &'a Vehicle,
}

/// Result of the assignment phase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentOutcome<'a> {
    /// Matched clusters in the order they were matched.
    pub assignments: Vec<Assignment<'a>>,
    /// Clusters no available vehicle could take.
    pub unassigned: Vec<Cluster<'a>>,
}

impl AssignmentOutcome<'_> {
    /// Ids of orders in unassigned clusters.
    pub fn unserved_order_ids(&self) -> Vec<String> {
        self.unassigned.iter().flat_map(|c| c.order_ids()).collect()
    }
}

/// Assigns each cluster at most one vehicle, using each vehicle at most once.
///
/// # Arguments
///
/// * `clusters`: Clusters from [`cluster_orders`](crate::clustering::cluster_orders)
/// * `vehicles`: The available pool, in preference order within a class
/// * `policy`: Weight limits for class selection
/// * `by_priority`: Visit clusters in descending priority; when `false`,
///   clusters are visited in the order given
///
/// # Examples
///
/// ```
/// use wildebeest_routing::assignment::{assign_vehicles, AssignmentPolicy};
/// use wildebeest_routing::clustering::cluster_orders;
/// use wildebeest_routing::models::*;
///
/// let depot = Coordinate::new(-1.28, 36.82);
/// let orders = vec![
///     DeliveryOrder::new("light", depot, Priority::Low, 5.0, 0.1),
///     DeliveryOrder::new("heavy", Coordinate::new(-1.40, 36.82), Priority::Low, 300.0, 2.0),
/// ];
/// let vehicles = vec![
///     Vehicle::new("van", "d1", VehicleClass::Van, Capacity::new(500.0, 10.0), depot, 10.0),
///     Vehicle::new("bike", "d2", VehicleClass::TwoWheeler, Capacity::new(20.0, 1.0), depot, 35.0),
/// ];
/// let clusters = cluster_orders(&orders, 5.0);
/// let outcome = assign_vehicles(clusters, &vehicles, &AssignmentPolicy::default(), true);
/// assert_eq!(outcome.assignments.len(), 2);
/// assert_eq!(outcome.assignments[0].vehicle.id(), "bike");
/// assert_eq!(outcome.assignments[1].vehicle.id(), "van");
/// assert!(outcome.unassigned.is_empty());
/// ```
pub fn assign_vehicles<'a, I>(
    mut clusters: Vec<Cluster<'a>>,
    vehicles: I,
    policy: &AssignmentPolicy,
    by_priority: bool,
) -> AssignmentOutcome<'a>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    if by_priority {
        clusters.sort_by_key(|c| Reverse(c.priority().rank()));
    }

    let mut pool: Vec<&'a Vehicle> = vehicles.into_iter().collect();
    let mut outcome = AssignmentOutcome::default();

    for cluster in clusters {
        let class = policy.preferred_class(&cluster);
        let weight = cluster.total_weight_kg();
        let volume = cluster.total_volume();

        let pick = pool
            .iter()
            .position(|v| v.class() == class && v.capacity().fits(weight, volume));

        match pick {
            Some(idx) => {
                let vehicle = pool.remove(idx);
                debug!(
                    vehicle = vehicle.id(),
                    ?class,
                    orders = cluster.len(),
                    weight_kg = weight,
                    volume,
                    "assigned cluster"
                );
                outcome.assignments.push(Assignment { cluster, vehicle });
            }
            None => {
                warn!(
                    ?class,
                    orders = cluster.len(),
                    weight_kg = weight,
                    volume,
                    "no available vehicle for cluster"
                );
                outcome.unassigned.push(cluster);
            }
        }
    }

    outcome
}

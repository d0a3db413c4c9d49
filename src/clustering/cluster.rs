//! A batch of orders delivered together by one vehicle.

use crate::models::{DeliveryOrder, Priority};

/// Orders grouped for a single vehicle during one planning run.
///
/// Borrows the orders it groups; a cluster holding an expedited order
/// holds nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster<'a> {
    orders: Vec<&'a DeliveryOrder>,
}

impl<'a> Cluster<'a> {
    /// Creates a cluster from the given orders.
    pub fn new(orders: Vec<&'a DeliveryOrder>) -> Self {
        Self { orders }
    }

    /// A cluster holding a single order.
    pub fn singleton(order: &'a DeliveryOrder) -> Self {
        Self::new(vec![order])
    }

    /// Member orders in cluster order.
    pub fn orders(&self) -> &[&'a DeliveryOrder] {
        &self.orders
    }

    /// Number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns `true` if the cluster has no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Highest member priority; `Low` for an empty cluster.
    pub fn priority(&self) -> Priority {
        self.orders
            .iter()
            .map(|o| o.priority())
            .max()
            .unwrap_or(Priority::Low)
    }

    /// Returns `true` if any member is expedited.
    pub fn has_expedited(&self) -> bool {
        self.orders.iter().any(|o| o.is_expedited())
    }

    /// Combined weight in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.orders.iter().map(|o| o.weight_kg()).sum()
    }

    /// Combined volume.
    pub fn total_volume(&self) -> f64 {
        self.orders.iter().map(|o| o.volume()).sum()
    }

    /// Member order ids.
    pub fn order_ids(&self) -> Vec<String> {
        self.orders.iter().map(|o| o.id().to_string()).collect()
    }
}

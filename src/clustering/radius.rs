//! Seed-radius clustering.
//!
//! # Algorithm
//!
//! 1. Every expedited order becomes its own singleton cluster, emitted first
//!    in input order.
//! 2. Remaining orders are scanned in input order. Each order not yet
//!    placed seeds a new cluster and pulls in every other unplaced order
//!    whose plain great-circle distance to the *seed* is within the radius.
//!
//! Membership is measured from the seed only, not transitively, so two
//! members of one cluster may be up to twice the radius apart, and an order
//! joins the first seed it is close to even if a later seed is closer.
//!
//! # Complexity
//!
//! O(n²) distance evaluations in the worst case.

use tracing::debug;

use crate::models::DeliveryOrder;

use super::Cluster;

/// Groups orders into delivery clusters.
///
/// # Arguments
///
/// * `orders`: Pending orders, in input order
/// * `radius_km`: Maximum seed-to-member distance for regular orders
///
/// # Examples
///
/// ```
/// use wildebeest_routing::clustering::cluster_orders;
/// use wildebeest_routing::models::{Coordinate, DeliveryOrder, Priority};
///
/// let orders = vec![
///     DeliveryOrder::new("a", Coordinate::new(-1.280, 36.820), Priority::Low, 2.0, 0.1),
///     DeliveryOrder::new("b", Coordinate::new(-1.281, 36.821), Priority::Expedited, 1.0, 0.1),
///     DeliveryOrder::new("c", Coordinate::new(-1.282, 36.822), Priority::Medium, 3.0, 0.1),
///     DeliveryOrder::new("d", Coordinate::new(-1.900, 36.820), Priority::Low, 3.0, 0.1),
/// ];
/// let clusters = cluster_orders(&orders, 5.0);
/// let ids: Vec<Vec<String>> = clusters.iter().map(|c| c.order_ids()).collect();
/// assert_eq!(ids, vec![vec!["b"], vec!["a", "c"], vec!["d"]]);
/// ```
pub fn cluster_orders(orders: &[DeliveryOrder], radius_km: f64) -> Vec<Cluster<'_>> {
    let (expedited, regular): (Vec<&DeliveryOrder>, Vec<&DeliveryOrder>) =
        orders.iter().partition(|o| o.is_expedited());

    let mut clusters: Vec<Cluster<'_>> = expedited.into_iter().map(Cluster::singleton).collect();
    let num_expedited = clusters.len();

    let mut placed = vec![false; regular.len()];
    for seed_idx in 0..regular.len() {
        if placed[seed_idx] {
            continue;
        }
        placed[seed_idx] = true;
        let seed = regular[seed_idx];
        let mut members = vec![seed];

        for other_idx in 0..regular.len() {
            if placed[other_idx] {
                continue;
            }
            let other = regular[other_idx];
            if seed.destination().distance_to(&other.destination()) <= radius_km {
                placed[other_idx] = true;
                members.push(other);
            }
        }

        clusters.push(Cluster::new(members));
    }

    debug!(
        orders = orders.len(),
        expedited = num_expedited,
        clusters = clusters.len(),
        radius_km,
        "clustered orders"
    );
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Priority};

    fn order(id: &str, lat: f64, lng: f64, priority: Priority) -> DeliveryOrder {
        DeliveryOrder::new(id, Coordinate::new(lat, lng), priority, 1.0, 0.1)
    }

    /// Degrees of longitude at the equator spanning `km` kilometers.
    fn km_east(km: f64) -> f64 {
        km / 111.194_926_644_558_73
    }

    #[test]
    fn test_empty() {
        assert!(cluster_orders(&[], 5.0).is_empty());
    }

    #[test]
    fn test_expedited_are_singletons_and_first() {
        let orders = vec![
            order("r1", 0.0, 0.0, Priority::Low),
            order("e1", 0.0, 0.0, Priority::Expedited),
            order("r2", 0.0, 0.0, Priority::High),
            order("e2", 0.0, 0.0, Priority::Expedited),
        ];
        let clusters = cluster_orders(&orders, 5.0);
        assert_eq!(clusters.len(), 3);
        assert_eq!(clusters[0].order_ids(), vec!["e1"]);
        assert_eq!(clusters[1].order_ids(), vec!["e2"]);
        assert_eq!(clusters[2].order_ids(), vec!["r1", "r2"]);
    }

    #[test]
    fn test_radius_is_inclusive_boundary() {
        let orders = vec![
            order("a", 0.0, 0.0, Priority::Low),
            order("b", 0.0, km_east(4.99), Priority::Low),
            order("c", 0.0, km_east(5.01), Priority::Low),
        ];
        let clusters = cluster_orders(&orders, 5.0);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].order_ids(), vec!["a", "b"]);
        assert_eq!(clusters[1].order_ids(), vec!["c"]);
    }

    #[test]
    fn test_membership_measured_from_seed_only() {
        // a at 0 km, b at 4 km, c at 8 km: c is within 5 km of b but not of
        // the seed a, so it starts its own cluster.
        let orders = vec![
            order("a", 0.0, 0.0, Priority::Low),
            order("b", 0.0, km_east(4.0), Priority::Low),
            order("c", 0.0, km_east(8.0), Priority::Low),
        ];
        let clusters = cluster_orders(&orders, 5.0);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].order_ids(), vec!["a", "b"]);
        assert_eq!(clusters[1].order_ids(), vec!["c"]);
    }

    #[test]
    fn test_members_can_span_twice_the_radius() {
        // Seed in the middle pulls in both sides, 8 km apart from each other.
        let orders = vec![
            order("mid", 0.0, 0.0, Priority::Low),
            order("west", 0.0, -km_east(4.0), Priority::Low),
            order("east", 0.0, km_east(4.0), Priority::Low),
        ];
        let clusters = cluster_orders(&orders, 5.0);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].order_ids(), vec!["mid", "west", "east"]);
    }

    #[test]
    fn test_first_seed_wins() {
        // b is 4 km from seed a and 1 km from c, but a seeds first.
        let orders = vec![
            order("a", 0.0, 0.0, Priority::Low),
            order("c", 0.0, km_east(9.0), Priority::Low),
            order("b", 0.0, km_east(4.0), Priority::Low),
        ];
        let clusters = cluster_orders(&orders, 5.0);
        assert_eq!(clusters[0].order_ids(), vec!["a", "b"]);
        assert_eq!(clusters[1].order_ids(), vec!["c"]);
    }

    #[test]
    fn test_every_order_in_exactly_one_cluster() {
        let orders: Vec<DeliveryOrder> = (0..20)
            .map(|i| {
                let p = if i % 7 == 0 {
                    Priority::Expedited
                } else {
                    Priority::Medium
                };
                order(&format!("o{i}"), 0.0, km_east(i as f64 * 1.7), p)
            })
            .collect();
        let clusters = cluster_orders(&orders, 5.0);
        let mut ids: Vec<String> = clusters.iter().flat_map(|c| c.order_ids()).collect();
        ids.sort();
        let mut expected: Vec<String> = orders.iter().map(|o| o.id().to_string()).collect();
        expected.sort();
        assert_eq!(ids, expected);
        for c in &clusters {
            if c.has_expedited() {
                assert_eq!(c.len(), 1);
            }
        }
    }
}

//! Per-assignment route solving.

use jiff::Timestamp;
use tracing::debug;

use crate::assignment::Assignment;
use crate::conditions::{ConditionAdjuster, ConditionContext};
use crate::constructive::nearest_neighbor_tour;
use crate::distance::{haversine_km, DistanceMatrix};
use crate::evaluation::{EvaluationParams, RouteEvaluator};
use crate::local_search::{tour_distance, two_opt_improve};
use crate::models::{Coordinate, DeliveryOrder, OptimizedRoute};

/// Solves the visiting order of one assignment.
///
/// Holds only shared, read-only state, so one solver can be used from many
/// threads at once.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::assignment::Assignment;
/// use wildebeest_routing::clustering::Cluster;
/// use wildebeest_routing::conditions::{ConditionAdjuster, ConditionContext};
/// use wildebeest_routing::evaluation::EvaluationParams;
/// use wildebeest_routing::models::*;
/// use wildebeest_routing::optimizer::RouteSolver;
///
/// let depot = Coordinate::new(0.0, 0.0);
/// let van = Vehicle::new("van", "d", VehicleClass::Van, Capacity::new(500.0, 10.0), depot, 10.0);
/// let far = DeliveryOrder::new("far", Coordinate::new(0.0, 0.02), Priority::Low, 30.0, 1.0);
/// let near = DeliveryOrder::new("near", Coordinate::new(0.0, 0.01), Priority::Low, 30.0, 1.0);
/// let assignment = Assignment { cluster: Cluster::new(vec![&far, &near]), vehicle: &van };
///
/// let adjuster = ConditionAdjuster::default();
/// let params = EvaluationParams::default();
/// let solver = RouteSolver::new(
///     &adjuster,
///     ConditionContext::new(12, 1),
///     &params,
///     "2024-01-08T12:00:00Z".parse().unwrap(),
/// );
/// let route = solver.solve(&assignment);
/// assert_eq!(route.order_ids, vec!["near", "far"]);
/// ```
pub struct RouteSolver<'a> {
    adjuster: &'a ConditionAdjuster,
    context: ConditionContext,
    params: &'a EvaluationParams,
    departure: Timestamp,
}

impl<'a> RouteSolver<'a> {
    /// Creates a solver for one planning run.
    pub fn new(
        adjuster: &'a ConditionAdjuster,
        context: ConditionContext,
        params: &'a EvaluationParams,
        departure: Timestamp,
    ) -> Self {
        Self {
            adjuster,
            context,
            params,
            departure,
        }
    }

    /// Builds the adjusted distance matrix for a vehicle start and its
    /// orders. Index 0 is the vehicle's location; index `k` is `orders[k-1]`.
    pub fn adjusted_matrix(&self, assignment: &Assignment<'_>) -> DistanceMatrix {
        let class = assignment.vehicle.class();
        let points: Vec<Coordinate> = std::iter::once(assignment.vehicle.location())
            .chain(assignment.cluster.orders().iter().map(|o| o.destination()))
            .collect();
        DistanceMatrix::from_points_with(&points, |a, b| {
            self.adjuster
                .adjusted_distance(haversine_km(a, b), a, b, class, &self.context)
        })
    }

    /// Returns the visit order as indices into the cluster's orders, chosen
    /// by nearest neighbor followed by 2-opt on adjusted distances.
    pub fn visit_order(&self, assignment: &Assignment<'_>) -> Vec<usize> {
        let matrix = self.adjusted_matrix(assignment);
        let initial = nearest_neighbor_tour(&matrix, 0);
        let initial_distance = tour_distance(&initial, &matrix);
        let (tour, improved_distance) = two_opt_improve(&initial, &matrix);

        debug!(
            vehicle = assignment.vehicle.id(),
            stops = assignment.cluster.len(),
            initial_distance,
            improved_distance,
            "solved route"
        );

        tour.into_iter().skip(1).map(|i| i - 1).collect()
    }

    /// Solves and evaluates one assignment.
    pub fn solve(&self, assignment: &Assignment<'_>) -> OptimizedRoute {
        let orders = assignment.cluster.orders();
        let stops: Vec<&DeliveryOrder> = self
            .visit_order(assignment)
            .into_iter()
            .map(|i| orders[i])
            .collect();
        RouteEvaluator::new(assignment.vehicle, self.params, self.departure).build_route(&stops)
    }
}

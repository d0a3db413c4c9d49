//! Route evaluator that computes timing, distance, fuel cost, and theme.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::models::{DeliveryOrder, OptimizedRoute, RouteTheme, Vehicle, VehicleClass, Waypoint};

/// Average travel speed per vehicle class, in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSpeeds {
    pub two_wheeler_kmh: f64,
    pub van_kmh: f64,
    pub truck_kmh: f64,
}

impl Default for ClassSpeeds {
    fn default() -> Self {
        Self {
            two_wheeler_kmh: 25.0,
            van_kmh: 35.0,
            truck_kmh: 45.0,
        }
    }
}

impl ClassSpeeds {
    /// Speed of the given class.
    pub fn speed_kmh(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::TwoWheeler => self.two_wheeler_kmh,
            VehicleClass::Van => self.van_kmh,
            VehicleClass::Truck => self.truck_kmh,
        }
    }

    /// Minutes needed to cover `distance_km` with the given class.
    pub fn travel_minutes(&self, class: VehicleClass, distance_km: f64) -> f64 {
        distance_km / self.speed_kmh(class) * 60.0
    }
}

/// Costing and labelling parameters for solved routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationParams {
    pub speeds: ClassSpeeds,
    /// Price of one litre of fuel.
    pub fuel_price_per_litre: f64,
    /// Routes with more stops than this are a migration.
    pub migration_stop_threshold: usize,
    /// Routes longer than this are long-haul.
    pub long_haul_threshold_km: f64,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            speeds: ClassSpeeds::default(),
            fuel_price_per_litre: 650.0,
            migration_stop_threshold: 10,
            long_haul_threshold_km: 50.0,
        }
    }
}

/// Builds an [`OptimizedRoute`] from a vehicle and its orders in visit
/// order.
///
/// Reported distance is the plain great-circle length of the waypoint
/// chain, even though the visit order itself was chosen on
/// condition-adjusted distances. Routes are open: they end at the last
/// stop.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::evaluation::{EvaluationParams, RouteEvaluator};
/// use wildebeest_routing::models::*;
///
/// let depot = Coordinate::new(0.0, 0.0);
/// let van = Vehicle::new("van", "d", VehicleClass::Van, Capacity::new(500.0, 10.0), depot, 10.0);
/// let order = DeliveryOrder::new("o1", Coordinate::new(0.0, 0.1), Priority::Low, 30.0, 1.0);
/// let params = EvaluationParams::default();
/// let departure = "2024-06-03T09:00:00Z".parse().unwrap();
///
/// let route = RouteEvaluator::new(&van, &params, departure).build_route(&[&order]);
/// assert_eq!(route.waypoints.len(), 2);
/// assert!(route.waypoints[0].order_id.is_none());
/// assert!((route.total_distance_km - 11.119).abs() < 0.001);
/// ```
pub struct RouteEvaluator<'a> {
    vehicle: &'a Vehicle,
    params: &'a EvaluationParams,
    departure: Timestamp,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator for one vehicle departing at `departure`.
    pub fn new(vehicle: &'a Vehicle, params: &'a EvaluationParams, departure: Timestamp) -> Self {
        Self {
            vehicle,
            params,
            departure,
        }
    }

    /// Builds the timed, costed route for the given visit order.
    pub fn build_route(&self, stops: &[&DeliveryOrder]) -> OptimizedRoute {
        let vehicle = self.vehicle;
        let mut route = OptimizedRoute::new(vehicle.id(), vehicle.driver_id());

        route.waypoints.push(Waypoint {
            location: vehicle.location(),
            order_id: None,
            estimated_arrival: self.departure,
            service_minutes: 0.0,
            late: false,
        });

        let mut elapsed = 0.0;
        let mut total_distance = 0.0;
        let mut prev = vehicle.location();

        for order in stops {
            let leg = haversine_km(prev, order.destination());
            total_distance += leg;
            elapsed += self.params.speeds.travel_minutes(vehicle.class(), leg);

            let arrival = advance(self.departure, elapsed);
            let late = order
                .time_window()
                .is_some_and(|tw| tw.is_violated(arrival));
            if late {
                route.late_orders.push(order.id().to_string());
            }

            route.waypoints.push(Waypoint {
                location: order.destination(),
                order_id: Some(order.id().to_string()),
                estimated_arrival: arrival,
                service_minutes: order.service_minutes(),
                late,
            });
            route.order_ids.push(order.id().to_string());

            elapsed += order.service_minutes();
            prev = order.destination();
        }

        route.total_distance_km = total_distance;
        route.total_duration_minutes = elapsed;
        route.fuel_cost = total_distance / vehicle.fuel_efficiency_km_per_l()
            * self.params.fuel_price_per_litre;
        route.theme = self.theme(stops, total_distance);
        route
    }

    /// First matching rule wins: expedited, two-wheeler, stop count,
    /// distance.
    fn theme(&self, stops: &[&DeliveryOrder], distance_km: f64) -> RouteTheme {
        if stops.iter().any(|o| o.is_expedited()) {
            RouteTheme::Sprint
        } else if self.vehicle.is_two_wheeler() {
            RouteTheme::Agility
        } else if stops.len() > self.params.migration_stop_threshold {
            RouteTheme::Migration
        } else if distance_km > self.params.long_haul_threshold_km {
            RouteTheme::LongHaul
        } else {
            RouteTheme::StandardPatrol
        }
    }
}

/// `start` plus `minutes`, saturating at the latest representable instant.
fn advance(start: Timestamp, minutes: f64) -> Timestamp {
    SignedDuration::try_from_secs_f64(minutes * 60.0)
        .ok()
        .and_then(|d| start.checked_add(d).ok())
        .unwrap_or(Timestamp::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Capacity, Coordinate, Priority, TimeWindow};

    /// Degrees of longitude at the equator spanning `km` kilometers.
    fn km_east(km: f64) -> f64 {
        km / 111.194_926_644_558_73
    }

    fn departure() -> Timestamp {
        "2024-06-03T09:00:00Z".parse().expect("valid timestamp")
    }

    fn vehicle(class: VehicleClass) -> Vehicle {
        Vehicle::new(
            "v1",
            "driver-1",
            class,
            Capacity::new(1000.0, 50.0),
            Coordinate::new(0.0, 0.0),
            10.0,
        )
    }

    fn order_at(id: &str, km: f64, priority: Priority) -> DeliveryOrder {
        DeliveryOrder::new(id, Coordinate::new(0.0, km_east(km)), priority, 10.0, 0.5)
            .with_service_minutes(6.0)
    }

    #[test]
    fn test_empty_route_has_depot_only() {
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[]);
        assert!(route.is_empty());
        assert_eq!(route.waypoints.len(), 1);
        assert_eq!(route.waypoints[0].estimated_arrival, departure());
        assert_eq!(route.total_distance_km, 0.0);
        assert_eq!(route.total_duration_minutes, 0.0);
        assert_eq!(route.fuel_cost, 0.0);
        assert_eq!(route.theme, RouteTheme::StandardPatrol);
    }

    #[test]
    fn test_timing_chain() {
        // Van at 35 km/h: 7 km = 12 min, then 6 min service, 3.5 km = 6 min.
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let a = order_at("a", 7.0, Priority::Low);
        let b = order_at("b", 10.5, Priority::Low);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a, &b]);

        assert_eq!(route.order_ids, vec!["a", "b"]);
        let t0 = departure();
        let t1 = route.waypoints[1].estimated_arrival;
        let t2 = route.waypoints[2].estimated_arrival;
        assert!((t1.duration_since(t0).as_secs_f64() - 12.0 * 60.0).abs() < 1e-3);
        assert!((t2.duration_since(t0).as_secs_f64() - 24.0 * 60.0).abs() < 1e-3);
        assert!((route.total_duration_minutes - 30.0).abs() < 1e-6);
        assert!((route.total_distance_km - 10.5).abs() < 1e-6);
    }

    #[test]
    fn test_fuel_cost() {
        let v = vehicle(VehicleClass::Truck);
        let params = EvaluationParams {
            fuel_price_per_litre: 2.0,
            ..EvaluationParams::default()
        };
        let a = order_at("a", 20.0, Priority::Low);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a]);
        // 20 km / 10 km/l * 2.0
        assert!((route.fuel_cost - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_class_speeds() {
        let s = ClassSpeeds::default();
        assert!((s.travel_minutes(VehicleClass::TwoWheeler, 25.0) - 60.0).abs() < 1e-10);
        assert!((s.travel_minutes(VehicleClass::Van, 35.0) - 60.0).abs() < 1e-10);
        assert!((s.travel_minutes(VehicleClass::Truck, 15.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_theme_sprint_beats_agility() {
        let v = vehicle(VehicleClass::TwoWheeler);
        let params = EvaluationParams::default();
        let a = order_at("a", 1.0, Priority::Expedited);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a]);
        assert_eq!(route.theme, RouteTheme::Sprint);
    }

    #[test]
    fn test_theme_agility() {
        let v = vehicle(VehicleClass::TwoWheeler);
        let params = EvaluationParams::default();
        let a = order_at("a", 80.0, Priority::Low);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a]);
        assert_eq!(route.theme, RouteTheme::Agility);
    }

    #[test]
    fn test_theme_migration_beats_long_haul() {
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let orders: Vec<DeliveryOrder> = (0..11)
            .map(|i| order_at(&format!("o{i}"), 6.0 * (i + 1) as f64, Priority::Low))
            .collect();
        let stops: Vec<&DeliveryOrder> = orders.iter().collect();
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&stops);
        assert!(route.total_distance_km > 50.0);
        assert_eq!(route.theme, RouteTheme::Migration);
    }

    #[test]
    fn test_theme_ten_stops_is_not_migration() {
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let orders: Vec<DeliveryOrder> = (0..10)
            .map(|i| order_at(&format!("o{i}"), 0.1 * i as f64, Priority::Low))
            .collect();
        let stops: Vec<&DeliveryOrder> = orders.iter().collect();
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&stops);
        assert_eq!(route.theme, RouteTheme::StandardPatrol);
    }

    #[test]
    fn test_theme_long_haul() {
        let v = vehicle(VehicleClass::Truck);
        let params = EvaluationParams::default();
        let a = order_at("a", 60.0, Priority::High);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a]);
        assert_eq!(route.theme, RouteTheme::LongHaul);
    }

    #[test]
    fn test_late_arrival_flagged() {
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let window = TimeWindow::new(
            "2024-06-03T08:00:00Z".parse().expect("valid"),
            "2024-06-03T09:05:00Z".parse().expect("valid"),
        )
        .expect("valid window");
        // 35 km at 35 km/h arrives at 10:00, after the window.
        let late = order_at("late", 35.0, Priority::Low).with_time_window(window);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&late]);
        assert!(route.waypoints[1].late);
        assert_eq!(route.late_orders, vec!["late"]);
    }

    #[test]
    fn test_on_time_arrival_not_flagged() {
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let window = TimeWindow::new(
            "2024-06-03T08:00:00Z".parse().expect("valid"),
            "2024-06-03T12:00:00Z".parse().expect("valid"),
        )
        .expect("valid window");
        let a = order_at("a", 3.5, Priority::Low).with_time_window(window);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a]);
        assert!(!route.waypoints[1].late);
        assert!(route.late_orders.is_empty());
    }

    #[test]
    fn test_zero_length_legs() {
        let v = vehicle(VehicleClass::Van);
        let params = EvaluationParams::default();
        let a = order_at("a", 0.0, Priority::Low);
        let b = order_at("b", 0.0, Priority::Low);
        let route = RouteEvaluator::new(&v, &params, departure()).build_route(&[&a, &b]);
        assert_eq!(route.total_distance_km, 0.0);
        assert!((route.total_duration_minutes - 12.0).abs() < 1e-10);
        assert_eq!(route.waypoints[1].estimated_arrival, departure());
        assert!(route.waypoints[2].estimated_arrival > route.waypoints[1].estimated_arrival);
    }

    #[test]
    fn test_advance_saturates() {
        assert_eq!(advance(departure(), f64::INFINITY), Timestamp::MAX);
        assert_eq!(advance(departure(), 0.0), departure());
    }
}

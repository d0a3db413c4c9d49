//! Input validation errors.

use std::collections::HashSet;

use thiserror::Error;

use crate::conditions::PlanningClock;
use crate::models::{Coordinate, DeliveryOrder, Vehicle};
use crate::optimizer::OptimizerConfig;

/// An input record rejected before planning starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("order {order_id}: weight must be a non-negative number, got {weight_kg}")]
    InvalidOrderWeight { order_id: String, weight_kg: f64 },
    #[error("order {order_id}: volume must be a non-negative number, got {volume}")]
    InvalidOrderVolume { order_id: String, volume: f64 },
    #[error("order {order_id}: service duration must be a non-negative number, got {minutes}")]
    InvalidServiceDuration { order_id: String, minutes: f64 },
    #[error("order {order_id}: destination ({lat}, {lng}) is not a valid coordinate")]
    InvalidOrderDestination { order_id: String, lat: f64, lng: f64 },
    #[error("order {order_id}: time window starts after it ends")]
    InvalidTimeWindow { order_id: String },
    #[error("order id {0} appears more than once")]
    DuplicateOrder(String),
    #[error("vehicle {vehicle_id}: capacity must be positive, got {max_weight_kg} kg / {max_volume}")]
    InvalidCapacity {
        vehicle_id: String,
        max_weight_kg: f64,
        max_volume: f64,
    },
    #[error("vehicle {vehicle_id}: fuel efficiency must be positive, got {km_per_l}")]
    InvalidFuelEfficiency { vehicle_id: String, km_per_l: f64 },
    #[error("vehicle {vehicle_id}: location ({lat}, {lng}) is not a valid coordinate")]
    InvalidVehicleLocation { vehicle_id: String, lat: f64, lng: f64 },
    #[error("vehicle id {0} appears more than once")]
    DuplicateVehicle(String),
    #[error("config {field}: {value} is out of range")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("planning clock: hour {hour} / month {month} is out of range")]
    InvalidClock { hour: u8, month: u8 },
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Checks that every tunable in `config` is usable: speeds and the
/// orders-per-route target positive, distances and prices non-negative,
/// savings fractions in [0, 1], multipliers positive, and hour and month
/// tables in range.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::error::{validate_config, ValidationError};
/// use wildebeest_routing::optimizer::OptimizerConfig;
///
/// assert!(validate_config(&OptimizerConfig::default()).is_ok());
///
/// let mut config = OptimizerConfig::default();
/// config.evaluation.speeds.van_kmh = 0.0;
/// assert_eq!(
///     validate_config(&config),
///     Err(ValidationError::InvalidConfig { field: "evaluation.speeds.van_kmh", value: 0.0 })
/// );
/// ```
pub fn validate_config(config: &OptimizerConfig) -> Result<(), ValidationError> {
    let t = &config.conditions;
    let e = &config.evaluation;
    let s = &config.summary;
    let a = &config.assignment;

    let checks: [(&'static str, f64, fn(f64) -> bool); 20] = [
        ("cluster_radius_km", config.cluster_radius_km, non_negative),
        ("assignment.two_wheeler_max_weight_kg", a.two_wheeler_max_weight_kg, non_negative),
        ("assignment.van_max_weight_kg", a.van_max_weight_kg, non_negative),
        ("evaluation.speeds.two_wheeler_kmh", e.speeds.two_wheeler_kmh, positive),
        ("evaluation.speeds.van_kmh", e.speeds.van_kmh, positive),
        ("evaluation.speeds.truck_kmh", e.speeds.truck_kmh, positive),
        ("evaluation.fuel_price_per_litre", e.fuel_price_per_litre, non_negative),
        ("evaluation.long_haul_threshold_km", e.long_haul_threshold_km, non_negative),
        ("summary.target_orders_per_route", s.target_orders_per_route, positive),
        ("summary.distance_saving", s.distance_saving, fraction),
        ("summary.duration_saving", s.duration_saving, fraction),
        ("summary.fuel_saving", s.fuel_saving, fraction),
        ("summary.co2_kg_per_km", s.co2_kg_per_km, non_negative),
        ("conditions.highway_delta_degrees", t.highway_delta_degrees, non_negative),
        ("conditions.peak_highway_factor", t.peak_highway_factor, positive),
        ("conditions.peak_local_factor", t.peak_local_factor, positive),
        ("conditions.rainy_factor", t.rainy_factor, positive),
        ("conditions.two_wheeler_highway_factor", t.two_wheeler_highway_factor, positive),
        ("conditions.two_wheeler_local_factor", t.two_wheeler_local_factor, positive),
        ("conditions.night_insecure_factor", t.night_insecure_factor, positive),
    ];
    if let Some(&(field, value, _)) = checks.iter().find(|(_, value, ok)| !ok(*value)) {
        return Err(ValidationError::InvalidConfig { field, value });
    }

    let hours = t
        .peak_hours
        .iter()
        .map(|&h| ("conditions.peak_hours", h))
        .chain([
            ("conditions.night_starts_at", t.night_starts_at),
            ("conditions.night_ends_at", t.night_ends_at),
        ]);
    if let Some((field, hour)) = hours.into_iter().find(|&(_, h)| h > 23) {
        return Err(ValidationError::InvalidConfig {
            field,
            value: f64::from(hour),
        });
    }
    if let Some(&month) = t.rainy_months.iter().find(|&&m| !(1..=12).contains(&m)) {
        return Err(ValidationError::InvalidConfig {
            field: "conditions.rainy_months",
            value: f64::from(month),
        });
    }
    Ok(())
}

/// Checks that the clock's hour is 0-23 and its month 1-12.
pub fn validate_clock(clock: &PlanningClock) -> Result<(), ValidationError> {
    if clock.hour > 23 || !(1..=12).contains(&clock.month) {
        return Err(ValidationError::InvalidClock {
            hour: clock.hour,
            month: clock.month,
        });
    }
    Ok(())
}

/// Checks a single order.
pub fn validate_order(order: &DeliveryOrder) -> Result<(), ValidationError> {
    let order_id = || order.id().to_string();
    if !non_negative(order.weight_kg()) {
        return Err(ValidationError::InvalidOrderWeight {
            order_id: order_id(),
            weight_kg: order.weight_kg(),
        });
    }
    if !non_negative(order.volume()) {
        return Err(ValidationError::InvalidOrderVolume {
            order_id: order_id(),
            volume: order.volume(),
        });
    }
    if !non_negative(order.service_minutes()) {
        return Err(ValidationError::InvalidServiceDuration {
            order_id: order_id(),
            minutes: order.service_minutes(),
        });
    }
    let dest: Coordinate = order.destination();
    if !dest.is_valid() {
        return Err(ValidationError::InvalidOrderDestination {
            order_id: order_id(),
            lat: dest.lat(),
            lng: dest.lng(),
        });
    }
    if let Some(tw) = order.time_window() {
        if tw.start() > tw.end() {
            return Err(ValidationError::InvalidTimeWindow {
                order_id: order_id(),
            });
        }
    }
    Ok(())
}

/// Checks a single vehicle.
pub fn validate_vehicle(vehicle: &Vehicle) -> Result<(), ValidationError> {
    let vehicle_id = || vehicle.id().to_string();
    let cap = vehicle.capacity();
    if !positive(cap.max_weight_kg) || !positive(cap.max_volume) {
        return Err(ValidationError::InvalidCapacity {
            vehicle_id: vehicle_id(),
            max_weight_kg: cap.max_weight_kg,
            max_volume: cap.max_volume,
        });
    }
    if !positive(vehicle.fuel_efficiency_km_per_l()) {
        return Err(ValidationError::InvalidFuelEfficiency {
            vehicle_id: vehicle_id(),
            km_per_l: vehicle.fuel_efficiency_km_per_l(),
        });
    }
    let loc = vehicle.location();
    if !loc.is_valid() {
        return Err(ValidationError::InvalidVehicleLocation {
            vehicle_id: vehicle_id(),
            lat: loc.lat(),
            lng: loc.lng(),
        });
    }
    Ok(())
}

/// Checks every order and vehicle, and that ids are unique within each
/// list. Stops at the first offending record.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::error::{validate_inputs, ValidationError};
/// use wildebeest_routing::models::{Coordinate, DeliveryOrder, Priority};
///
/// let bad = DeliveryOrder::new("o-1", Coordinate::new(0.0, 0.0), Priority::Low, -2.0, 1.0);
/// let err = validate_inputs(&[bad], &[]).unwrap_err();
/// assert!(matches!(err, ValidationError::InvalidOrderWeight { .. }));
/// assert!(err.to_string().contains("o-1"));
/// ```
pub fn validate_inputs(orders: &[DeliveryOrder], vehicles: &[Vehicle]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(orders.len());
    for order in orders {
        validate_order(order)?;
        if !seen.insert(order.id()) {
            return Err(ValidationError::DuplicateOrder(order.id().to_string()));
        }
    }

    let mut seen = HashSet::with_capacity(vehicles.len());
    for vehicle in vehicles {
        validate_vehicle(vehicle)?;
        if !seen.insert(vehicle.id()) {
            return Err(ValidationError::DuplicateVehicle(vehicle.id().to_string()));
        }
    }
    Ok(())
}

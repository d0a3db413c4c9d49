//! Vehicle type with class, capacity, and fuel parameters.

use serde::{Deserialize, Serialize};

use super::{Coordinate, TimeWindow};

/// Vehicle class, ordered by ascending capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// Light two-wheeler (motorcycle or bicycle courier).
    TwoWheeler,
    Van,
    Truck,
}

/// Load limits of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    /// Maximum weight in kilograms.
    pub max_weight_kg: f64,
    /// Maximum volume in cubic units.
    pub max_volume: f64,
}

impl Capacity {
    /// Creates a capacity from weight and volume limits.
    pub fn new(max_weight_kg: f64, max_volume: f64) -> Self {
        Self {
            max_weight_kg,
            max_volume,
        }
    }

    /// Returns `true` if a load of the given weight and volume fits.
    pub fn fits(&self, weight_kg: f64, volume: f64) -> bool {
        weight_kg <= self.max_weight_kg && volume <= self.max_volume
    }
}

/// A vehicle that can be assigned to one delivery route per planning run.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::models::{Capacity, Coordinate, Vehicle, VehicleClass};
///
/// let v = Vehicle::new(
///     "bike-1",
///     "driver-9",
///     VehicleClass::TwoWheeler,
///     Capacity::new(20.0, 0.5),
///     Coordinate::new(-1.28, 36.82),
///     40.0,
/// );
/// assert_eq!(v.id(), "bike-1");
/// assert!(v.capacity().fits(12.0, 0.3));
/// assert!(!v.capacity().fits(25.0, 0.3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: String,
    driver_id: String,
    class: VehicleClass,
    capacity: Capacity,
    location: Coordinate,
    fuel_efficiency_km_per_l: f64,
    #[serde(default)]
    availability: Option<TimeWindow>,
    #[serde(default)]
    capabilities: Vec<String>,
}

impl Vehicle {
    /// Creates a vehicle available for the whole planning run with no
    /// special capabilities.
    pub fn new(
        id: impl Into<String>,
        driver_id: impl Into<String>,
        class: VehicleClass,
        capacity: Capacity,
        location: Coordinate,
        fuel_efficiency_km_per_l: f64,
    ) -> Self {
        Self {
            id: id.into(),
            driver_id: driver_id.into(),
            class,
            capacity,
            location,
            fuel_efficiency_km_per_l,
            availability: None,
            capabilities: Vec::new(),
        }
    }

    /// Restricts the vehicle to the given availability window.
    pub fn with_availability(mut self, window: TimeWindow) -> Self {
        self.availability = Some(window);
        self
    }

    /// Adds a capability tag (e.g. `"refrigerated"`).
    pub fn with_capability(mut self, tag: impl Into<String>) -> Self {
        self.capabilities.push(tag.into());
        self
    }

    /// Vehicle identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the driver operating this vehicle.
    pub fn driver_id(&self) -> &str {
        &self.driver_id
    }

    /// Vehicle class.
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Load limits.
    pub fn capacity(&self) -> &Capacity {
        &self.capacity
    }

    /// Current location, used as the route's depot.
    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Distance travelled per litre of fuel, in kilometers.
    pub fn fuel_efficiency_km_per_l(&self) -> f64 {
        self.fuel_efficiency_km_per_l
    }

    /// Availability window, if restricted.
    pub fn availability(&self) -> Option<&TimeWindow> {
        self.availability.as_ref()
    }

    /// Capability tags.
    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    /// Returns `true` if the vehicle is a two-wheeler.
    pub fn is_two_wheeler(&self) -> bool {
        self.class == VehicleClass::TwoWheeler
    }
}

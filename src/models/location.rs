//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::models::Coordinate;
///
/// let nairobi = Coordinate::new(-1.2921, 36.8219);
/// assert_eq!(nairobi.lat(), -1.2921);
/// assert!(nairobi.is_valid());
/// assert!(!Coordinate::new(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns `true` if both components are finite and within
    /// [-90, 90] × [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance to another coordinate, in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        crate::distance::haversine_km(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_accessors() {
        let c = Coordinate::new(6.5244, 3.3792);
        assert_eq!(c.lat(), 6.5244);
        assert_eq!(c.lng(), 3.3792);
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(-90.1, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_distance_to_self() {
        let c = Coordinate::new(-1.28, 36.82);
        assert_eq!(c.distance_to(&c), 0.0);
    }
}

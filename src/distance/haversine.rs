//! Great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers, using the
/// haversine formula.
///
/// Symmetric, and zero for identical points.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::distance::haversine_km;
/// use wildebeest_routing::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(0.0, 1.0);
/// // One degree of longitude at the equator is ~111.19 km.
/// assert!((haversine_km(a, b) - 111.19).abs() < 0.01);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lng = (b.lng() - a.lng()).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

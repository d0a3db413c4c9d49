//! Distance functions and matrices.
//!
//! Provides great-circle distance between coordinates and a dense distance
//! matrix for per-route solving.

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;

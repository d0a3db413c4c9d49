//! Static lookup tables for the condition adjuster.

use serde::{Deserialize, Serialize};

/// Immutable lookup tables and multipliers used to turn a plain distance
/// into an effective one.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::conditions::ConditionTables;
///
/// let tables = ConditionTables::default();
/// assert!(tables.is_peak_hour(8));
/// assert!(!tables.is_peak_hour(12));
/// assert!(tables.is_rainy_month(4));
/// assert!(tables.is_night_hour(22));
/// assert!(tables.is_night_hour(6));
/// assert!(!tables.is_night_hour(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionTables {
    /// Hours of day (0-23) with peak traffic.
    pub peak_hours: Vec<u8>,
    /// Calendar months (1-12) of the rainy season.
    pub rainy_months: Vec<u8>,
    /// Night begins at this hour (inclusive).
    pub night_starts_at: u8,
    /// Night ends at this hour (inclusive).
    pub night_ends_at: u8,
    /// A segment whose latitude or longitude delta exceeds this many degrees
    /// is treated as a major-highway segment.
    pub highway_delta_degrees: f64,
    pub peak_highway_factor: f64,
    pub peak_local_factor: f64,
    pub rainy_factor: f64,
    pub two_wheeler_highway_factor: f64,
    pub two_wheeler_local_factor: f64,
    pub night_insecure_factor: f64,
}

impl Default for ConditionTables {
    fn default() -> Self {
        Self {
            peak_hours: vec![7, 8, 9, 17, 18, 19],
            rainy_months: vec![3, 4, 5, 10, 11],
            night_starts_at: 20,
            night_ends_at: 6,
            highway_delta_degrees: 0.05,
            peak_highway_factor: 1.8,
            peak_local_factor: 1.4,
            rainy_factor: 1.3,
            two_wheeler_highway_factor: 1.2,
            two_wheeler_local_factor: 0.8,
            night_insecure_factor: 1.5,
        }
    }
}

impl ConditionTables {
    /// Returns `true` if the hour is a peak traffic hour.
    pub fn is_peak_hour(&self, hour: u8) -> bool {
        self.peak_hours.contains(&hour)
    }

    /// Returns `true` if the month falls in the rainy season.
    pub fn is_rainy_month(&self, month: u8) -> bool {
        self.rainy_months.contains(&month)
    }

    /// Returns `true` if the hour is at or after nightfall, or at or before
    /// daybreak.
    pub fn is_night_hour(&self, hour: u8) -> bool {
        hour >= self.night_starts_at || hour <= self.night_ends_at
    }
}

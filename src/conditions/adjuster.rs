//! Condition adjuster: scales plain distances by traffic, weather, vehicle,
//! and security factors.

use std::fmt;
use std::sync::Arc;

use crate::models::{Coordinate, VehicleClass};

use super::{ConditionContext, ConditionTables};

/// Decides whether a segment runs through an area unsafe at night.
///
/// Implemented for any `Fn(Coordinate, Coordinate) -> bool + Send + Sync`.
pub trait InsecureArea: Send + Sync {
    /// Returns `true` if travelling from `from` to `to` crosses an insecure
    /// area.
    fn is_insecure(&self, from: Coordinate, to: Coordinate) -> bool;
}

impl<F> InsecureArea for F
where
    F: Fn(Coordinate, Coordinate) -> bool + Send + Sync,
{
    fn is_insecure(&self, from: Coordinate, to: Coordinate) -> bool {
        self(from, to)
    }
}

/// Treats every segment as secure.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInsecureAreas;

impl InsecureArea for NoInsecureAreas {
    fn is_insecure(&self, _from: Coordinate, _to: Coordinate) -> bool {
        false
    }
}

/// Maps a plain distance to an effective distance.
///
/// Four independent rules each contribute a multiplier (1.0 when the rule
/// does not apply), and all multipliers are applied to the same base:
///
/// ```text
/// adjusted = base × traffic × weather × vehicle × security
/// ```
///
/// - traffic: peak hour with traffic modelling on; ×1.8 on highway segments,
///   ×1.4 elsewhere
/// - weather: rainy month with weather modelling on; ×1.3
/// - vehicle: two-wheelers ×1.2 on highway segments, ×0.8 elsewhere
/// - security: night hour on an insecure segment; ×1.5
///
/// # Examples
///
/// ```
/// use wildebeest_routing::conditions::{ConditionAdjuster, ConditionContext, ConditionTables};
/// use wildebeest_routing::models::{Coordinate, VehicleClass};
///
/// let adjuster = ConditionAdjuster::new(ConditionTables::default());
/// let a = Coordinate::new(-1.28, 36.82);
/// let b = Coordinate::new(-1.29, 36.83);
///
/// // Midday in a dry month with a van: no rule applies.
/// let calm = ConditionContext::new(12, 1).with_traffic(true).with_weather(true);
/// assert_eq!(adjuster.adjusted_distance(10.0, a, b, VehicleClass::Van, &calm), 10.0);
///
/// // Peak hour in the rainy season: 1.4 (local traffic) x 1.3 (rain).
/// let rush = ConditionContext::new(8, 4).with_traffic(true).with_weather(true);
/// let d = adjuster.adjusted_distance(10.0, a, b, VehicleClass::Van, &rush);
/// assert!((d - 18.2).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct ConditionAdjuster {
    tables: ConditionTables,
    insecure: Arc<dyn InsecureArea>,
}

impl ConditionAdjuster {
    /// Creates an adjuster that treats every area as secure.
    pub fn new(tables: ConditionTables) -> Self {
        Self {
            tables,
            insecure: Arc::new(NoInsecureAreas),
        }
    }

    /// Replaces the insecure-area predicate.
    pub fn with_insecure_area<P>(mut self, predicate: P) -> Self
    where
        P: InsecureArea + 'static,
    {
        self.insecure = Arc::new(predicate);
        self
    }

    /// The lookup tables in use.
    pub fn tables(&self) -> &ConditionTables {
        &self.tables
    }

    /// Returns `true` if the segment is classified as a major highway: the
    /// latitude or longitude delta exceeds the configured threshold.
    pub fn is_highway_segment(&self, from: Coordinate, to: Coordinate) -> bool {
        let threshold = self.tables.highway_delta_degrees;
        (from.lat() - to.lat()).abs() > threshold || (from.lng() - to.lng()).abs() > threshold
    }

    /// Combined multiplier for a segment.
    pub fn factor(
        &self,
        from: Coordinate,
        to: Coordinate,
        class: VehicleClass,
        ctx: &ConditionContext,
    ) -> f64 {
        let t = &self.tables;
        let highway = self.is_highway_segment(from, to);

        let traffic = if ctx.include_traffic && t.is_peak_hour(ctx.hour) {
            if highway {
                t.peak_highway_factor
            } else {
                t.peak_local_factor
            }
        } else {
            1.0
        };

        let weather = if ctx.include_weather && t.is_rainy_month(ctx.month) {
            t.rainy_factor
        } else {
            1.0
        };

        let vehicle = match (class, highway) {
            (VehicleClass::TwoWheeler, true) => t.two_wheeler_highway_factor,
            (VehicleClass::TwoWheeler, false) => t.two_wheeler_local_factor,
            _ => 1.0,
        };

        let security = if t.is_night_hour(ctx.hour) && self.insecure.is_insecure(from, to) {
            t.night_insecure_factor
        } else {
            1.0
        };

        traffic * weather * vehicle * security
    }

    /// Scales `base` by the combined multiplier for the segment.
    pub fn adjusted_distance(
        &self,
        base: f64,
        from: Coordinate,
        to: Coordinate,
        class: VehicleClass,
        ctx: &ConditionContext,
    ) -> f64 {
        base * self.factor(from, to, class, ctx)
    }
}

impl Default for ConditionAdjuster {
    fn default() -> Self {
        Self::new(ConditionTables::default())
    }
}

impl fmt::Debug for ConditionAdjuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionAdjuster")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> (Coordinate, Coordinate) {
        (Coordinate::new(-1.28, 36.82), Coordinate::new(-1.29, 36.83))
    }

    fn highway() -> (Coordinate, Coordinate) {
        (Coordinate::new(-1.28, 36.82), Coordinate::new(-1.28, 36.90))
    }

    fn adjuster() -> ConditionAdjuster {
        ConditionAdjuster::default()
    }

    #[test]
    fn test_highway_classification() {
        let adj = adjuster();
        let (a, b) = local();
        assert!(!adj.is_highway_segment(a, b));
        let (a, b) = highway();
        assert!(adj.is_highway_segment(a, b));
        // Exactly at the threshold is not a highway.
        assert!(!adj.is_highway_segment(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 0.05)
        ));
    }

    #[test]
    fn test_no_rules_apply() {
        let (a, b) = local();
        let ctx = ConditionContext::new(12, 1).with_traffic(true).with_weather(true);
        assert_eq!(adjuster().adjusted_distance(7.5, a, b, VehicleClass::Truck, &ctx), 7.5);
    }

    #[test]
    fn test_flags_off_ignore_peak_and_rain() {
        let (a, b) = local();
        let ctx = ConditionContext::new(8, 4);
        assert_eq!(adjuster().factor(a, b, VehicleClass::Van, &ctx), 1.0);
    }

    #[test]
    fn test_peak_traffic_factors() {
        let ctx = ConditionContext::new(18, 1).with_traffic(true);
        let (a, b) = local();
        assert!((adjuster().factor(a, b, VehicleClass::Van, &ctx) - 1.4).abs() < 1e-10);
        let (a, b) = highway();
        assert!((adjuster().factor(a, b, VehicleClass::Van, &ctx) - 1.8).abs() < 1e-10);
    }

    #[test]
    fn test_rainy_factor() {
        let (a, b) = local();
        let ctx = ConditionContext::new(12, 11).with_weather(true);
        assert!((adjuster().factor(a, b, VehicleClass::Truck, &ctx) - 1.3).abs() < 1e-10);
    }

    #[test]
    fn test_two_wheeler_factors() {
        let ctx = ConditionContext::new(12, 1);
        let (a, b) = local();
        assert!((adjuster().factor(a, b, VehicleClass::TwoWheeler, &ctx) - 0.8).abs() < 1e-10);
        let (a, b) = highway();
        assert!((adjuster().factor(a, b, VehicleClass::TwoWheeler, &ctx) - 1.2).abs() < 1e-10);
    }

    #[test]
    fn test_default_predicate_never_insecure() {
        let (a, b) = local();
        let ctx = ConditionContext::new(23, 1);
        assert_eq!(adjuster().factor(a, b, VehicleClass::Van, &ctx), 1.0);
    }

    #[test]
    fn test_night_insecure_factor() {
        let adj = adjuster().with_insecure_area(|_: Coordinate, _: Coordinate| true);
        let (a, b) = local();
        let night = ConditionContext::new(22, 1);
        assert!((adj.factor(a, b, VehicleClass::Van, &night) - 1.5).abs() < 1e-10);
        let day = ConditionContext::new(14, 1);
        assert_eq!(adj.factor(a, b, VehicleClass::Van, &day), 1.0);
    }

    #[test]
    fn test_all_rules_compound() {
        let (a, b) = highway();
        // 19:00 is a peak hour but not night under the default tables, so
        // widen the night span to exercise all four rules at once.
        let tables = ConditionTables {
            night_starts_at: 19,
            ..ConditionTables::default()
        };
        let adj = ConditionAdjuster::new(tables)
            .with_insecure_area(|_: Coordinate, _: Coordinate| true);
        let ctx = ConditionContext::new(19, 4).with_traffic(true).with_weather(true);
        let got = adj.adjusted_distance(10.0, a, b, VehicleClass::TwoWheeler, &ctx);
        assert!((got - 10.0 * 1.8 * 1.3 * 1.2 * 1.5).abs() < 1e-9);

        let got_default = adjuster()
            .with_insecure_area(|_: Coordinate, _: Coordinate| true)
            .adjusted_distance(10.0, a, b, VehicleClass::TwoWheeler, &ctx);
        assert!((got_default - 10.0 * 1.8 * 1.3 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_zero_base_stays_zero() {
        let (a, _) = local();
        let ctx = ConditionContext::new(8, 4).with_traffic(true).with_weather(true);
        assert_eq!(adjuster().adjusted_distance(0.0, a, a, VehicleClass::Van, &ctx), 0.0);
    }
}

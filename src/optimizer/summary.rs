//! Fleet-level totals, efficiency, savings, and advisory notes.

use crate::conditions::{ConditionTables, PlanningClock};
use crate::models::{
    Efficiency, EfficiencyRating, FleetTotals, OptimizedRoute, RouteOptimizationResult,
    SavingsEstimate,
};

use super::{OptimizationOptions, SummaryParams};

/// Sums route metrics into fleet totals.
pub fn fleet_totals(routes: &[OptimizedRoute]) -> FleetTotals {
    routes.iter().fold(FleetTotals::default(), |acc, r| FleetTotals {
        distance_km: acc.distance_km + r.total_distance_km,
        duration_minutes: acc.duration_minutes + r.total_duration_minutes,
        fuel_cost: acc.fuel_cost + r.fuel_cost,
    })
}

/// Scores a plan by its average orders per route against the target,
/// capped at 100.
///
/// `total_orders` counts every order submitted, served or not. With no
/// routes the score is zero and the rating is
/// [`EfficiencyRating::NoRoutes`].
///
/// # Examples
///
/// ```
/// use wildebeest_routing::models::EfficiencyRating;
/// use wildebeest_routing::optimizer::{efficiency, SummaryParams};
///
/// let params = SummaryParams::default();
/// let e = efficiency(14, 2, &params);
/// assert!((e.score - 70.0).abs() < 1e-10);
/// assert_eq!(e.rating, EfficiencyRating::Good);
/// assert_eq!(efficiency(5, 0, &params).rating, EfficiencyRating::NoRoutes);
/// ```
pub fn efficiency(total_orders: usize, num_routes: usize, params: &SummaryParams) -> Efficiency {
    if num_routes == 0 {
        return Efficiency::no_routes();
    }
    let average = total_orders as f64 / num_routes as f64;
    let score = (average / params.target_orders_per_route * 100.0).min(100.0);
    Efficiency {
        score,
        rating: EfficiencyRating::from_score(score),
    }
}

/// Declared savings versus an unoptimized plan: fixed fractions of the
/// totals, not a comparison solve.
pub fn savings(totals: &FleetTotals, params: &SummaryParams) -> SavingsEstimate {
    SavingsEstimate {
        distance_km: totals.distance_km * params.distance_saving,
        duration_minutes: totals.duration_minutes * params.duration_saving,
        fuel_cost: totals.fuel_cost * params.fuel_saving,
        co2_kg: totals.distance_km * params.co2_kg_per_km * params.distance_saving,
    }
}

/// Free-text notes on the conditions a plan was computed under.
pub fn advisory_notes(
    tables: &ConditionTables,
    clock: &PlanningClock,
    options: &OptimizationOptions,
    unserved: usize,
) -> Vec<String> {
    let mut notes = Vec::new();
    if options.include_traffic && tables.is_peak_hour(clock.hour) {
        notes.push(
            "Peak-hour traffic expected: allow extra travel time, especially on highway segments."
                .to_string(),
        );
    }
    if options.include_weather && tables.is_rainy_month(clock.month) {
        notes.push(
            "Rainy season: roads may be slow or flooded; keep parcels protected from water."
                .to_string(),
        );
    }
    if tables.is_night_hour(clock.hour) {
        notes.push(
            "Night-time dispatch: keep drivers to well-lit, secure routes and share live locations."
                .to_string(),
        );
    }
    if unserved > 0 {
        notes.push(format!(
            "{unserved} order(s) could not be matched to a vehicle; consider adding capacity."
        ));
    }
    if notes.is_empty() {
        notes.push("Conditions are favourable: the herd can move at full pace.".to_string());
    }
    notes
}

/// Assembles the final result from solved routes.
pub fn summarize(
    routes: Vec<OptimizedRoute>,
    total_orders: usize,
    unserved_orders: Vec<String>,
    recommendations: Vec<String>,
    params: &SummaryParams,
) -> RouteOptimizationResult {
    let totals = fleet_totals(&routes);
    RouteOptimizationResult {
        efficiency: efficiency(total_orders, routes.len(), params),
        savings: savings(&totals, params),
        totals,
        routes,
        unserved_orders,
        recommendations,
    }
}

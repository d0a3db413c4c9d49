//! Fleet-level optimization result types.

use serde::{Deserialize, Serialize};

use super::OptimizedRoute;

/// Sums across all routes of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetTotals {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub fuel_cost: f64,
}

/// Four-tier rating of a plan's efficiency score, plus an explicit state
/// for plans without routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyRating {
    Excellent,
    Good,
    Fair,
    Developing,
    /// No route was produced; the score is undefined and reported as zero.
    NoRoutes,
}

impl EfficiencyRating {
    /// Maps a score in [0, 100] to a rating: >80 excellent, >60 good,
    /// >40 fair, otherwise developing.
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            EfficiencyRating::Excellent
        } else if score > 60.0 {
            EfficiencyRating::Good
        } else if score > 40.0 {
            EfficiencyRating::Fair
        } else {
            EfficiencyRating::Developing
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            EfficiencyRating::Excellent => "Excellent: the herd moves as one",
            EfficiencyRating::Good => "Good: a well-organised herd",
            EfficiencyRating::Fair => "Fair: some stragglers",
            EfficiencyRating::Developing => "Developing: the herd is scattered",
            EfficiencyRating::NoRoutes => "No routes produced",
        }
    }
}

/// Efficiency score and its rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Efficiency {
    /// Score in [0, 100].
    pub score: f64,
    pub rating: EfficiencyRating,
}

impl Efficiency {
    /// The efficiency of a plan with no routes.
    pub fn no_routes() -> Self {
        Self {
            score: 0.0,
            rating: EfficiencyRating::NoRoutes,
        }
    }
}

/// Estimated savings relative to an unoptimized plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsEstimate {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub fuel_cost: f64,
    pub co2_kg: f64,
}

/// The outcome of one planning run.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::models::{EfficiencyRating, RouteOptimizationResult};
///
/// let result = RouteOptimizationResult::empty();
/// assert_eq!(result.num_routes(), 0);
/// assert_eq!(result.efficiency.rating, EfficiencyRating::NoRoutes);
/// assert_eq!(result.efficiency.score, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptimizationResult {
    pub routes: Vec<OptimizedRoute>,
    pub totals: FleetTotals,
    pub efficiency: Efficiency,
    pub savings: SavingsEstimate,
    /// Orders in clusters no vehicle could take.
    pub unserved_orders: Vec<String>,
    /// Free-text advisory notes.
    pub recommendations: Vec<String>,
}

impl RouteOptimizationResult {
    /// A result with no routes and zero totals.
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            totals: FleetTotals::default(),
            efficiency: Efficiency::no_routes(),
            savings: SavingsEstimate::default(),
            unserved_orders: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of orders served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Number of orders left unserved.
    pub fn num_unserved(&self) -> usize {
        self.unserved_orders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(EfficiencyRating::from_score(100.0), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_score(80.0), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_score(60.5), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_score(60.0), EfficiencyRating::Fair);
        assert_eq!(EfficiencyRating::from_score(40.0), EfficiencyRating::Developing);
        assert_eq!(EfficiencyRating::from_score(0.0), EfficiencyRating::Developing);
    }

    #[test]
    fn test_empty_result() {
        let r = RouteOptimizationResult::empty();
        assert_eq!(r.num_routes(), 0);
        assert_eq!(r.num_served(), 0);
        assert_eq!(r.num_unserved(), 0);
        assert_eq!(r.totals, FleetTotals::default());
        assert!(!r.efficiency.score.is_nan());
    }

    #[test]
    fn test_num_served() {
        let mut r = RouteOptimizationResult::empty();
        let mut a = OptimizedRoute::new("v1", "d1");
        a.order_ids = vec!["o1".into(), "o2".into()];
        let mut b = OptimizedRoute::new("v2", "d2");
        b.order_ids = vec!["o3".into()];
        r.routes = vec![a, b];
        r.unserved_orders = vec!["o4".into()];
        assert_eq!(r.num_routes(), 2);
        assert_eq!(r.num_served(), 3);
        assert_eq!(r.num_unserved(), 1);
    }
}

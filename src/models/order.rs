//! Delivery order, priority, and time window types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A delivery time window.
///
/// An arrival after `end` is late; arriving before `start` is allowed.
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use wildebeest_routing::models::TimeWindow;
///
/// let start: Timestamp = "2024-03-04T08:00:00Z".parse().unwrap();
/// let end: Timestamp = "2024-03-04T12:00:00Z".parse().unwrap();
/// let tw = TimeWindow::new(start, end).unwrap();
/// assert!(tw.contains("2024-03-04T09:30:00Z".parse().unwrap()));
/// assert!(tw.is_violated("2024-03-04T12:00:01Z".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: Timestamp,
    end: Timestamp,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `start > end`.
    pub fn new(start: Timestamp, end: Timestamp) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// Start of the window.
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// End of the window.
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Returns `true` if the given instant falls within this window.
    pub fn contains(&self, at: Timestamp) -> bool {
        at >= self.start && at <= self.end
    }

    /// Returns `true` if arriving at the given instant is late.
    pub fn is_violated(&self, arrival: Timestamp) -> bool {
        arrival > self.end
    }
}

/// Urgency class of an order, in ascending rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    /// Never shares a vehicle with another order.
    Expedited,
}

impl Priority {
    /// Numeric rank used when ordering clusters: expedited 4, high 3,
    /// medium 2, low 1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Expedited => 4,
        }
    }
}

/// A unit of delivery demand.
///
/// # Examples
///
/// ```
/// use wildebeest_routing::models::{Coordinate, DeliveryOrder, Priority};
///
/// let order = DeliveryOrder::new("ord-1", Coordinate::new(-1.29, 36.82), Priority::High, 4.5, 0.02)
///     .with_service_minutes(10.0)
///     .with_requirement("fragile");
/// assert_eq!(order.id(), "ord-1");
/// assert_eq!(order.priority(), Priority::High);
/// assert!(!order.is_expedited());
/// assert_eq!(order.special_requirements(), ["fragile"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrder {
    id: String,
    destination: Coordinate,
    #[serde(default)]
    time_window: Option<TimeWindow>,
    priority: Priority,
    weight_kg: f64,
    volume: f64,
    #[serde(default)]
    special_requirements: Vec<String>,
    #[serde(default = "default_service_minutes")]
    service_minutes: f64,
}

fn default_service_minutes() -> f64 {
    DeliveryOrder::DEFAULT_SERVICE_MINUTES
}

impl DeliveryOrder {
    /// On-site duration assumed when none is given.
    pub const DEFAULT_SERVICE_MINUTES: f64 = 5.0;

    /// Creates an order with no time window, no special requirements, and
    /// the default service duration.
    pub fn new(
        id: impl Into<String>,
        destination: Coordinate,
        priority: Priority,
        weight_kg: f64,
        volume: f64,
    ) -> Self {
        Self {
            id: id.into(),
            destination,
            time_window: None,
            priority,
            weight_kg,
            volume,
            special_requirements: Vec::new(),
            service_minutes: Self::DEFAULT_SERVICE_MINUTES,
        }
    }

    /// Sets the delivery time window.
    pub fn with_time_window(mut self, tw: TimeWindow) -> Self {
        self.time_window = Some(tw);
        self
    }

    /// Sets the estimated on-site service duration in minutes.
    pub fn with_service_minutes(mut self, minutes: f64) -> Self {
        self.service_minutes = minutes;
        self
    }

    /// Adds a special-requirement tag.
    pub fn with_requirement(mut self, tag: impl Into<String>) -> Self {
        self.special_requirements.push(tag.into());
        self
    }

    /// Order identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Delivery destination.
    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// Delivery time window, if any.
    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// Priority class.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns `true` for expedited orders.
    pub fn is_expedited(&self) -> bool {
        self.priority == Priority::Expedited
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Volume in cubic units.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Free-form special-requirement tags.
    pub fn special_requirements(&self) -> &[String] {
        &self.special_requirements
    }

    /// Estimated on-site service duration in minutes.
    pub fn service_minutes(&self) -> f64 {
        self.service_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    #[test]
    fn test_time_window_valid() {
        let tw = TimeWindow::new(ts("2024-01-01T08:00:00Z"), ts("2024-01-01T10:00:00Z"))
            .expect("valid");
        assert_eq!(tw.start(), ts("2024-01-01T08:00:00Z"));
        assert_eq!(tw.end(), ts("2024-01-01T10:00:00Z"));
    }

    #[test]
    fn test_time_window_invalid() {
        assert!(TimeWindow::new(ts("2024-01-01T10:00:00Z"), ts("2024-01-01T08:00:00Z")).is_none());
    }

    #[test]
    fn test_time_window_contains_and_violated() {
        let tw = TimeWindow::new(ts("2024-01-01T08:00:00Z"), ts("2024-01-01T10:00:00Z"))
            .expect("valid");
        assert!(tw.contains(ts("2024-01-01T08:00:00Z")));
        assert!(tw.contains(ts("2024-01-01T10:00:00Z")));
        assert!(!tw.contains(ts("2024-01-01T07:59:59Z")));
        assert!(!tw.is_violated(ts("2024-01-01T07:00:00Z")));
        assert!(tw.is_violated(ts("2024-01-01T10:00:01Z")));
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Expedited > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::Expedited.rank(), 4);
        assert_eq!(Priority::Low.rank(), 1);
    }

    #[test]
    fn test_order_defaults() {
        let o = DeliveryOrder::new("a", Coordinate::new(0.0, 0.0), Priority::Low, 1.0, 2.0);
        assert_eq!(o.id(), "a");
        assert_eq!(o.weight_kg(), 1.0);
        assert_eq!(o.volume(), 2.0);
        assert_eq!(o.service_minutes(), DeliveryOrder::DEFAULT_SERVICE_MINUTES);
        assert!(o.time_window().is_none());
        assert!(o.special_requirements().is_empty());
    }

    #[test]
    fn test_order_expedited() {
        let o = DeliveryOrder::new("x", Coordinate::new(0.0, 0.0), Priority::Expedited, 1.0, 1.0);
        assert!(o.is_expedited());
    }

    #[test]
    fn test_order_deserialize_defaults() {
        let json = r#"{
            "id": "o-7",
            "destination": {"lat": -1.3, "lng": 36.8},
            "priority": "medium",
            "weight_kg": 3.0,
            "volume": 0.1
        }"#;
        let o: DeliveryOrder = serde_json::from_str(json).expect("valid json");
        assert_eq!(o.priority(), Priority::Medium);
        assert_eq!(o.service_minutes(), DeliveryOrder::DEFAULT_SERVICE_MINUTES);
        assert!(o.special_requirements().is_empty());
    }
}

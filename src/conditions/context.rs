//! Planning clock and per-run condition context.

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

/// The instant a plan is computed for, with the local hour and month used
/// by time-of-day and seasonal rules.
///
/// Tests pin these with [`PlanningClock::fixed`]; production callers use
/// [`PlanningClock::system`].
///
/// # Examples
///
/// ```
/// use wildebeest_routing::conditions::PlanningClock;
///
/// let now = "2024-04-15T08:30:00Z".parse().unwrap();
/// let clock = PlanningClock::fixed(now, 8, 4);
/// assert_eq!(clock.hour, 8);
/// assert_eq!(clock.month, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningClock {
    /// Departure time of every route.
    pub now: Timestamp,
    /// Local hour of day, 0-23.
    pub hour: u8,
    /// Local calendar month, 1-12.
    pub month: u8,
}

impl PlanningClock {
    /// Reads the current time in the system time zone.
    pub fn system() -> Self {
        Self::from_zoned(&Zoned::now())
    }

    /// Derives hour and month from a zoned datetime.
    pub fn from_zoned(zoned: &Zoned) -> Self {
        Self {
            now: zoned.timestamp(),
            hour: zoned.hour() as u8,
            month: zoned.month() as u8,
        }
    }

    /// A clock pinned to the given instant, hour, and month.
    pub fn fixed(now: Timestamp, hour: u8, month: u8) -> Self {
        Self { now, hour, month }
    }
}

/// Inputs to the condition adjuster that vary per planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionContext {
    pub include_traffic: bool,
    pub include_weather: bool,
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Calendar month, 1-12.
    pub month: u8,
}

impl ConditionContext {
    /// A context with all modelling disabled at the given hour and month.
    pub fn new(hour: u8, month: u8) -> Self {
        Self {
            include_traffic: false,
            include_weather: false,
            hour,
            month,
        }
    }

    /// Enables or disables traffic modelling.
    pub fn with_traffic(mut self, on: bool) -> Self {
        self.include_traffic = on;
        self
    }

    /// Enables or disables weather modelling.
    pub fn with_weather(mut self, on: bool) -> Self {
        self.include_weather = on;
        self
    }
}

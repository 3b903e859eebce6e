//! Clock event model and related types.
//!
//! This module defines the [`ClockEvent`] and [`ClockEventType`] types
//! representing a single attendance punch.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// The direction of a clock punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockEventType {
    /// The employee clocked in (start of a work interval).
    In,
    /// The employee clocked out (end of a work interval).
    Out,
}

impl std::fmt::Display for ClockEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClockEventType::In => write!(f, "in"),
            ClockEventType::Out => write!(f, "out"),
        }
    }
}

/// A single attendance punch.
///
/// Clock events are immutable inputs to the engine: they are persisted
/// externally and read-only here. The timestamp is a timezone-aware instant;
/// all calendar decisions (date grouping, lunch window, weekend detection)
/// convert it to the configured organizational timezone first.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{ClockEvent, ClockEventType};
/// use chrono::{DateTime, Utc};
///
/// let event = ClockEvent {
///     id: "evt_001".to_string(),
///     user_id: "user_042".to_string(),
///     event_type: ClockEventType::In,
///     timestamp: "2026-01-15T09:00:00+08:00".parse::<DateTime<Utc>>().unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    /// Unique identifier for the event.
    pub id: String,
    /// The user this punch belongs to.
    pub user_id: String,
    /// Whether this is an IN or OUT punch.
    #[serde(rename = "type")]
    pub event_type: ClockEventType,
    /// The instant the punch occurred.
    pub timestamp: DateTime<Utc>,
}

impl ClockEvent {
    /// Returns the punch time as a wall-clock datetime in the given timezone.
    pub fn local_datetime(&self, tz: FixedOffset) -> NaiveDateTime {
        self.timestamp.with_timezone(&tz).naive_local()
    }

    /// Returns the calendar date of the punch in the given timezone.
    pub fn local_date(&self, tz: FixedOffset) -> NaiveDate {
        self.local_datetime(tz).date()
    }
}

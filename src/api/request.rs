//! Request types for the Work-Time Computation Engine API.
//!
//! This module defines the JSON request structures for the `/stats` endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ClockEvent, ClockEventType, ReportingPeriod, TimeRange};

/// Request body for the `/stats` endpoint.
///
/// Contains the reporting period and the raw clock events to aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRequest {
    /// The reporting period for the aggregation.
    pub period: PeriodRequest,
    /// The clock events to analyze.
    #[serde(default)]
    pub events: Vec<ClockEventRequest>,
}

/// Reporting period information in a stats request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The start date of the window (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the window (exclusive).
    pub end_date: NaiveDate,
    /// The kind of window (week or month).
    pub time_range: TimeRange,
}

/// Clock event information in a stats request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockEventRequest {
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

impl From<PeriodRequest> for ReportingPeriod {
    fn from(req: PeriodRequest) -> Self {
        ReportingPeriod {
            start: req.start_date,
            end: req.end_date,
            time_range: req.time_range,
        }
    }
}

impl From<ClockEventRequest> for ClockEvent {
    fn from(req: ClockEventRequest) -> Self {
        ClockEvent {
            id: req.id,
            user_id: req.user_id,
            event_type: req.event_type,
            timestamp: req.timestamp,
        }
    }
}

//! Reporting period model.
//!
//! This module contains the [`ReportingPeriod`] and [`TimeRange`] types that
//! define the aggregation window for work-time statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of reporting window being aggregated.
///
/// Selects which period-level violation thresholds apply: the weekly-hours
/// cap is checked for [`TimeRange::Week`] periods and the monthly overtime
/// cap for [`TimeRange::Month`] periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    /// A one-week reporting window.
    Week,
    /// A one-month reporting window.
    Month,
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
        }
    }
}

/// A half-open date window `[start, end)` together with its range label.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{ReportingPeriod, TimeRange};
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     time_range: TimeRange::Week,
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 19).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The start date of the window (inclusive).
    pub start: NaiveDate,
    /// The end date of the window (exclusive).
    pub end: NaiveDate,
    /// The kind of window (week or month).
    pub time_range: TimeRange,
}

impl ReportingPeriod {
    /// Checks whether a date falls inside the window.
    ///
    /// The window is half-open: the start date is included, the end date
    /// is not.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Validates that the window is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `start` is not strictly
    /// before `end`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start >= self.end {
            return Err(EngineError::InvalidPeriod {
                start: self.start,
                end: self.end,
                message: "start date must be before end date".to_string(),
            });
        }
        Ok(())
    }
}

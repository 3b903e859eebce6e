//! Per-day work statistics.
//!
//! This module defines [`DayWorkStats`], the result of analyzing a single
//! day's clock events.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed work-time breakdown for a single calendar day.
///
/// Fields ending in `_actual_hours` hold the raw (unrounded) hours; their
/// counterparts hold the statutory value, floored to the nearest half-hour.
/// `total_overtime_hours` is the sum of the two rounded overtime tiers;
/// `exceed_hours` (time beyond the daily limit) is reported separately and
/// is NOT included in `total_overtime_hours`.
///
/// # Example
///
/// ```
/// use worktime_engine::models::DayWorkStats;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let stats = DayWorkStats::zero(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), false);
/// assert_eq!(stats.total_work_hours, Decimal::ZERO);
/// assert!(!stats.is_weekend);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWorkStats {
    /// The calendar date this breakdown applies to.
    pub date: NaiveDate,
    /// Whether the date falls on a Saturday or Sunday.
    pub is_weekend: bool,
    /// Regular (non-overtime) hours. Always zero on weekend days.
    pub regular_hours: Decimal,
    /// Tier-1 overtime hours, floored to the nearest half-hour.
    pub overtime1_hours: Decimal,
    /// Tier-1 overtime hours before rounding.
    pub overtime1_actual_hours: Decimal,
    /// Tier-2 overtime hours, floored to the nearest half-hour.
    pub overtime2_hours: Decimal,
    /// Tier-2 overtime hours before rounding.
    pub overtime2_actual_hours: Decimal,
    /// Sum of the rounded overtime tiers.
    pub total_overtime_hours: Decimal,
    /// Hours beyond the daily limit, floored to the nearest half-hour.
    pub exceed_hours: Decimal,
    /// Hours beyond the daily limit before rounding.
    pub exceed_actual_hours: Decimal,
    /// Total paired, lunch-adjusted hours worked on this day.
    pub total_work_hours: Decimal,
}

impl DayWorkStats {
    /// Creates an all-zero breakdown for the given date.
    pub fn zero(date: NaiveDate, is_weekend: bool) -> Self {
        Self {
            date,
            is_weekend,
            regular_hours: Decimal::ZERO,
            overtime1_hours: Decimal::ZERO,
            overtime1_actual_hours: Decimal::ZERO,
            overtime2_hours: Decimal::ZERO,
            overtime2_actual_hours: Decimal::ZERO,
            total_overtime_hours: Decimal::ZERO,
            exceed_hours: Decimal::ZERO,
            exceed_actual_hours: Decimal::ZERO,
            total_work_hours: Decimal::ZERO,
        }
    }
}

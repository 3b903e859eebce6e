//! Aggregate work-time statistics over a reporting period.
//!
//! This module contains the [`WorkTimeStats`] type and the [`BucketTotals`]
//! breakdown used for its weekday/weekend/total sections.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayWorkStats, ReportingPeriod, TimeRange};

/// The work-time bucket set summed over a partition of days.
///
/// The same shape is used for the weekday-only, weekend-only, and combined
/// sections of a [`WorkTimeStats`] response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotals {
    /// Regular (non-overtime) hours. Weekend days contribute zero.
    pub regular_hours: Decimal,
    /// Tier-1 overtime hours (statutory, half-hour floored).
    pub overtime1_hours: Decimal,
    /// Tier-1 overtime hours before rounding.
    pub overtime1_actual_hours: Decimal,
    /// Tier-2 overtime hours (statutory, half-hour floored).
    pub overtime2_hours: Decimal,
    /// Tier-2 overtime hours before rounding.
    pub overtime2_actual_hours: Decimal,
    /// Sum of the rounded overtime tiers.
    pub total_overtime_hours: Decimal,
    /// Hours beyond the daily limit (statutory, half-hour floored).
    pub exceed_hours: Decimal,
    /// Hours beyond the daily limit before rounding.
    pub exceed_actual_hours: Decimal,
    /// Total hours worked.
    pub total_work_hours: Decimal,
}

impl BucketTotals {
    /// Sums the bucket fields of the given days into a fresh total.
    pub fn sum_days<'a>(days: impl IntoIterator<Item = &'a DayWorkStats>) -> Self {
        days.into_iter().fold(Self::default(), |acc, day| Self {
            regular_hours: acc.regular_hours + day.regular_hours,
            overtime1_hours: acc.overtime1_hours + day.overtime1_hours,
            overtime1_actual_hours: acc.overtime1_actual_hours + day.overtime1_actual_hours,
            overtime2_hours: acc.overtime2_hours + day.overtime2_hours,
            overtime2_actual_hours: acc.overtime2_actual_hours + day.overtime2_actual_hours,
            total_overtime_hours: acc.total_overtime_hours + day.total_overtime_hours,
            exceed_hours: acc.exceed_hours + day.exceed_hours,
            exceed_actual_hours: acc.exceed_actual_hours + day.exceed_actual_hours,
            total_work_hours: acc.total_work_hours + day.total_work_hours,
        })
    }

    /// Combines two bucket totals field by field.
    ///
    /// Regular hours only ever come from the weekday partition (weekend days
    /// produce zero regular hours by construction), so a plain field-wise sum
    /// preserves `total.regular_hours == weekday.regular_hours`.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            regular_hours: self.regular_hours + other.regular_hours,
            overtime1_hours: self.overtime1_hours + other.overtime1_hours,
            overtime1_actual_hours: self.overtime1_actual_hours + other.overtime1_actual_hours,
            overtime2_hours: self.overtime2_hours + other.overtime2_hours,
            overtime2_actual_hours: self.overtime2_actual_hours + other.overtime2_actual_hours,
            total_overtime_hours: self.total_overtime_hours + other.total_overtime_hours,
            exceed_hours: self.exceed_hours + other.exceed_hours,
            exceed_actual_hours: self.exceed_actual_hours + other.exceed_actual_hours,
            total_work_hours: self.total_work_hours + other.total_work_hours,
        }
    }
}

/// The aggregate statistics for a reporting period.
///
/// Constructed fresh per request from a list of clock events and a period
/// boundary; never mutated after construction; not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeStats {
    /// The kind of reporting window that was aggregated.
    pub time_range: TimeRange,
    /// The start date of the window (inclusive).
    pub period_start: chrono::NaiveDate,
    /// The end date of the window (exclusive).
    pub period_end: chrono::NaiveDate,
    /// Totals over weekday (Monday through Friday) days only.
    pub weekday: BucketTotals,
    /// Totals over weekend (Saturday and Sunday) days only.
    pub weekend: BucketTotals,
    /// Combined totals over all days.
    pub total: BucketTotals,
    /// Human-readable statutory violation messages.
    pub violations: Vec<String>,
    /// The per-day breakdowns that were summed, in date order.
    pub daily_stats: Vec<DayWorkStats>,
}

impl WorkTimeStats {
    /// Builds the response envelope from already-summed partitions.
    ///
    /// `weekday` and `weekend` must be the bucket sums of the weekday and
    /// weekend days in `daily_stats`; the combined total is derived here so
    /// it cannot drift from the partitions.
    pub fn from_partitions(
        period: &ReportingPeriod,
        weekday: BucketTotals,
        weekend: BucketTotals,
        daily_stats: Vec<DayWorkStats>,
        violations: Vec<String>,
    ) -> Self {
        let total = weekday.combine(&weekend);

        Self {
            time_range: period.time_range,
            period_start: period.start,
            period_end: period.end,
            weekday,
            weekend,
            total,
            violations,
            daily_stats,
        }
    }
}

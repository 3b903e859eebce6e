//! Statutory violation checks.
//!
//! This module evaluates per-day and period-level rules over computed
//! work-time statistics and produces human-readable violation messages.

use crate::config::ThresholdsConfig;
use crate::models::{BucketTotals, DayWorkStats, TimeRange};

/// Evaluates the statutory violation rules for an aggregated period.
///
/// Three rules apply:
///
/// - **Daily limit** (always): any day whose total work time exceeds the
///   daily limit produces a message naming the date and the excess.
/// - **Weekly hours cap** ([`TimeRange::Week`] only): weekday work hours
///   over the weekly cap.
/// - **Monthly overtime cap** ([`TimeRange::Month`] only): total overtime
///   hours over the monthly cap.
///
/// Threshold selection is gated by the period's declared range, so a weekly
/// aggregate is never measured against the monthly overtime cap and vice
/// versa.
///
/// # Example
///
/// ```no_run
/// use worktime_engine::calculation::check_violations;
/// use worktime_engine::config::ConfigLoader;
/// use worktime_engine::models::{BucketTotals, TimeRange};
///
/// let loader = ConfigLoader::load("./config/worktime").unwrap();
/// let violations = check_violations(
///     &[],
///     &BucketTotals::default(),
///     &BucketTotals::default(),
///     TimeRange::Week,
///     loader.rules().thresholds(),
/// );
/// assert!(violations.is_empty());
/// ```
pub fn check_violations(
    daily_stats: &[DayWorkStats],
    weekday: &BucketTotals,
    total: &BucketTotals,
    time_range: TimeRange,
    thresholds: &ThresholdsConfig,
) -> Vec<String> {
    let mut violations = Vec::new();

    let daily_limit = thresholds.work_time.daily_limit_hours;
    for day in daily_stats {
        if day.total_work_hours > daily_limit {
            let excess = day.total_work_hours - daily_limit;
            violations.push(format!(
                "{}: worked {} hours, exceeding the {} hour daily limit by {} hours",
                day.date,
                day.total_work_hours.normalize(),
                daily_limit.normalize(),
                excess.normalize()
            ));
        }
    }

    match time_range {
        TimeRange::Week => {
            let cap = thresholds.violations.weekly_hours_cap;
            if weekday.total_work_hours > cap {
                violations.push(format!(
                    "weekday work time of {} hours exceeds the {} hour weekly limit",
                    weekday.total_work_hours.normalize(),
                    cap.normalize()
                ));
            }
        }
        TimeRange::Month => {
            let cap = thresholds.violations.monthly_overtime_cap;
            if total.total_overtime_hours > cap {
                violations.push(format!(
                    "total overtime of {} hours exceeds the {} hour monthly overtime cap",
                    total.total_overtime_hours.normalize(),
                    cap.normalize()
                ));
            }
        }
    }

    violations
}

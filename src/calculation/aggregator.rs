//! Period aggregation.
//!
//! This module groups clock events by calendar day, analyzes each day, and
//! assembles the aggregate [`WorkTimeStats`] for a reporting period.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::config::WorkTimeRules;
use crate::error::EngineResult;
use crate::models::{
    BucketTotals, ClockEvent, ClockEventType, DayWorkStats, ReportingPeriod, WorkTimeStats,
};

use super::day_analyzer::analyze_day;
use super::violations::check_violations;

/// Returns true for Saturdays and Sundays.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday, 2026-01-15 a Thursday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Computes the aggregate work-time statistics for a reporting period.
///
/// Events are grouped by their calendar date in the configured organizational
/// timezone. An `OUT` punch is attributed to the date of the `IN` punch it
/// closes, so an overnight pair stays together and is analyzed as one day —
/// the day the employee clocked in. Events whose attributed date falls
/// outside the half-open `[start, end)` window are ignored. Each date group
/// is analyzed independently, the per-day results are partitioned into
/// weekday and weekend totals, and the statutory violation rules are
/// evaluated over the aggregate with thresholds selected by the period's
/// declared range.
///
/// This is a pure computation: the inputs are not mutated, and the result is
/// built fresh on every call.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidPeriod`] when the period's
/// start date is not before its end date. The computation itself never fails
/// for well-formed input; malformed durations are clamped and dangling
/// punches contribute nothing.
///
/// # Example
///
/// ```no_run
/// use worktime_engine::calculation::compute_stats;
/// use worktime_engine::config::ConfigLoader;
/// use worktime_engine::models::{ReportingPeriod, TimeRange};
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/worktime").unwrap();
/// let period = ReportingPeriod {
///     start: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     end: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     time_range: TimeRange::Week,
/// };
///
/// let stats = compute_stats(&[], &period, loader.rules())?;
/// assert!(stats.daily_stats.is_empty());
/// # Ok::<(), worktime_engine::error::EngineError>(())
/// ```
pub fn compute_stats(
    events: &[ClockEvent],
    period: &ReportingPeriod,
    rules: &WorkTimeRules,
) -> EngineResult<WorkTimeStats> {
    period.validate()?;

    let tz = rules.timezone();

    let mut sorted: Vec<&ClockEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    // BTreeMap keeps daily_stats in date order. An OUT closing a pending IN
    // lands in the IN's date group so overnight pairs are not torn apart.
    let mut by_date: BTreeMap<NaiveDate, Vec<ClockEvent>> = BTreeMap::new();
    let mut pending_in_date: Option<NaiveDate> = None;
    for event in sorted {
        let date = match event.event_type {
            ClockEventType::In => {
                let date = event.local_date(tz);
                pending_in_date = Some(date);
                date
            }
            ClockEventType::Out => pending_in_date
                .take()
                .unwrap_or_else(|| event.local_date(tz)),
        };
        if period.contains_date(date) {
            by_date.entry(date).or_default().push(event.clone());
        }
    }

    let daily_stats: Vec<DayWorkStats> = by_date
        .iter()
        .map(|(date, day_events)| {
            analyze_day(day_events, *date, is_weekend(*date), rules.thresholds(), tz)
        })
        .collect();

    let weekday = BucketTotals::sum_days(daily_stats.iter().filter(|d| !d.is_weekend));
    let weekend = BucketTotals::sum_days(daily_stats.iter().filter(|d| d.is_weekend));

    // The combined total is derived once, inside the constructor; the
    // violation check reads it back from the assembled envelope.
    let mut stats = WorkTimeStats::from_partitions(period, weekday, weekend, daily_stats, vec![]);
    stats.violations = check_violations(
        &stats.daily_stats,
        &stats.weekday,
        &stats.total,
        period.time_range,
        rules.thresholds(),
    );

    Ok(stats)
}

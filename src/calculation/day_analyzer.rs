//! Per-day work-time analysis.
//!
//! This module pairs one day's clock events, deducts the lunch window, and
//! splits the resulting worked time into regular and tiered overtime buckets.

use chrono::{FixedOffset, NaiveDate};
use rust_decimal::Decimal;

use crate::config::ThresholdsConfig;
use crate::models::{ClockEvent, DayWorkStats};

use super::lunch_break::lunch_overlap_minutes;
use super::pairing::pair_events;
use super::rounding::statutory_round;

/// Analyzes a single day's clock events into a work-time breakdown.
///
/// The events may be unsorted and may contain unpaired punches; they are
/// assumed to belong to the same calendar day (the caller groups them).
/// An empty event list returns an all-zero breakdown carrying the supplied
/// `date`.
///
/// # Bucket split
///
/// On a **weekday** (with the statutory defaults of 8/2/2/12 hours):
/// - `regular_hours = min(total, 8)`
/// - tier-1 overtime: the first 2 hours beyond regular
/// - tier-2 overtime: the next 2 hours beyond tier 1
/// - exceed: anything beyond the 12-hour daily limit
///
/// On a **weekend day** no regular hours accrue: the first 2 hours are
/// tier-1 overtime, the next 10 are tier 2, anything beyond 12 is exceed.
///
/// Rounded fields are the statutory half-hour floor of their actual
/// counterparts; `total_overtime_hours` sums the rounded tiers and does NOT
/// include exceed hours.
///
/// # Example
///
/// ```no_run
/// use worktime_engine::calculation::analyze_day;
/// use worktime_engine::config::ConfigLoader;
/// use worktime_engine::models::{ClockEvent, ClockEventType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/worktime").unwrap();
/// let rules = loader.rules();
/// let events = vec![
///     ClockEvent {
///         id: "evt_001".to_string(),
///         user_id: "user_001".to_string(),
///         event_type: ClockEventType::In,
///         timestamp: "2026-01-15T09:00:00+08:00".parse().unwrap(),
///     },
///     ClockEvent {
///         id: "evt_002".to_string(),
///         user_id: "user_001".to_string(),
///         event_type: ClockEventType::Out,
///         timestamp: "2026-01-15T18:00:00+08:00".parse().unwrap(),
///     },
/// ];
///
/// let stats = analyze_day(
///     &events,
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     false,
///     rules.thresholds(),
///     rules.timezone(),
/// );
/// assert_eq!(stats.total_work_hours, Decimal::from(8)); // 9h minus 1h lunch
/// ```
pub fn analyze_day(
    events: &[ClockEvent],
    date: NaiveDate,
    is_weekend: bool,
    thresholds: &ThresholdsConfig,
    tz: FixedOffset,
) -> DayWorkStats {
    let intervals = pair_events(events, tz);

    let mut total_minutes: i64 = 0;
    for interval in &intervals {
        let worked = interval.duration_minutes()
            - lunch_overlap_minutes(interval, &thresholds.lunch_break);
        total_minutes += worked.max(0);
    }

    let total_hours = Decimal::from(total_minutes) / Decimal::from(60);
    let wt = &thresholds.work_time;

    let (regular_hours, overtime1_actual, overtime2_actual) = if is_weekend {
        let tier1 = total_hours.min(wt.overtime_tier1_cap_hours);
        let tier2 = (total_hours - wt.overtime_tier1_cap_hours)
            .max(Decimal::ZERO)
            .min(wt.weekend_tier2_cap_hours);
        (Decimal::ZERO, tier1, tier2)
    } else {
        let regular = total_hours.min(wt.weekday_regular_hours);
        let overtime = (total_hours - wt.weekday_regular_hours).max(Decimal::ZERO);
        let tier1 = overtime.min(wt.overtime_tier1_cap_hours);
        let tier2 = (overtime - wt.overtime_tier1_cap_hours)
            .max(Decimal::ZERO)
            .min(wt.weekday_tier2_cap_hours);
        (regular, tier1, tier2)
    };
    let exceed_actual = (total_hours - wt.daily_limit_hours).max(Decimal::ZERO);

    let overtime1_hours = statutory_round(overtime1_actual);
    let overtime2_hours = statutory_round(overtime2_actual);
    let exceed_hours = statutory_round(exceed_actual);

    DayWorkStats {
        date,
        is_weekend,
        regular_hours,
        overtime1_hours,
        overtime1_actual_hours: overtime1_actual,
        overtime2_hours,
        overtime2_actual_hours: overtime2_actual,
        total_overtime_hours: overtime1_hours + overtime2_hours,
        exceed_hours,
        exceed_actual_hours: exceed_actual,
        total_work_hours: total_hours,
    }
}

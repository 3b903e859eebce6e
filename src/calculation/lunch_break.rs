//! Lunch-window deduction.
//!
//! Paired work intervals overlapping the fixed lunch window have the overlap
//! deducted from their worked minutes.

use crate::config::LunchWindow;

use super::pairing::WorkInterval;

/// Returns the minutes of overlap between a work interval and the lunch window.
///
/// The window is anchored to the calendar date of the interval's IN punch.
/// For intervals that cross midnight this means only a lunch window on the
/// first day is considered; the engine does not re-anchor the window on
/// subsequent days.
///
/// The result is clamped to zero when the interval and window are disjoint.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::{lunch_overlap_minutes, WorkInterval};
/// use worktime_engine::config::LunchWindow;
/// use chrono::NaiveTime;
///
/// let window = LunchWindow {
///     start: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(13, 30, 0).unwrap(),
/// };
/// let interval = WorkInterval {
///     start: "2026-01-15T09:00:00".parse().unwrap(),
///     end: "2026-01-15T18:00:00".parse().unwrap(),
/// };
///
/// assert_eq!(lunch_overlap_minutes(&interval, &window), 60);
/// ```
pub fn lunch_overlap_minutes(interval: &WorkInterval, window: &LunchWindow) -> i64 {
    let date = interval.start.date();
    let lunch_start = date.and_time(window.start);
    let lunch_end = date.and_time(window.end);

    let overlap_start = interval.start.max(lunch_start);
    let overlap_end = interval.end.min(lunch_end);

    (overlap_end - overlap_start).num_minutes().max(0)
}

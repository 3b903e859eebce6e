//! IN/OUT event pairing.
//!
//! This module turns an unordered list of clock events into paired work
//! intervals, applying the engine's dangling-punch and double-punch policies.

use chrono::{FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{ClockEvent, ClockEventType};

/// A paired IN/OUT interval in local wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The IN punch time.
    pub start: NaiveDateTime,
    /// The OUT punch time.
    pub end: NaiveDateTime,
}

impl WorkInterval {
    /// Returns the interval duration in minutes, clamped to zero.
    ///
    /// A negative duration can only come from malformed timestamps; it must
    /// contribute nothing rather than corrupt aggregate sums.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }
}

/// Pairs clock events into work intervals.
///
/// Events are sorted ascending by timestamp before pairing, so callers may
/// pass them in any order. The walk keeps a single pending IN cursor:
///
/// - an `IN` punch records (or overwrites) the pending IN;
/// - an `OUT` punch closes the pending IN into an interval, if one exists.
///
/// Two policies fall out of this walk, both pinned by tests:
///
/// - **Double punch**: a second consecutive `IN` overwrites the pending IN,
///   discarding the earlier punch's pairing potential. Repeated INs are
///   treated as corrections of an erroneous earlier punch.
/// - **Dangling punch**: an `OUT` with no pending IN, or a trailing IN with
///   no OUT, contributes nothing. An open IN is never extrapolated to the
///   current time.
///
/// # Example
///
/// ```
/// use worktime_engine::calculation::pair_events;
/// use worktime_engine::models::{ClockEvent, ClockEventType};
/// use chrono::FixedOffset;
///
/// let tz = FixedOffset::east_opt(8 * 3600).unwrap();
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
///         timestamp: "2026-01-15T12:00:00+08:00".parse().unwrap(),
///     },
/// ];
///
/// let intervals = pair_events(&events, tz);
/// assert_eq!(intervals.len(), 1);
/// assert_eq!(intervals[0].duration_minutes(), 180);
/// ```
pub fn pair_events(events: &[ClockEvent], tz: FixedOffset) -> Vec<WorkInterval> {
    let mut sorted: Vec<&ClockEvent> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut intervals = Vec::new();
    let mut pending_in: Option<NaiveDateTime> = None;

    for event in sorted {
        let local = event.local_datetime(tz);
        match event.event_type {
            ClockEventType::In => {
                pending_in = Some(local);
            }
            ClockEventType::Out => {
                if let Some(start) = pending_in.take() {
                    intervals.push(WorkInterval { start, end: local });
                }
            }
        }
    }

    intervals
}

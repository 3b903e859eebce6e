//! Core data models for the Work-Time Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_event;
mod day_stats;
mod period;
mod work_time_stats;

pub use clock_event::{ClockEvent, ClockEventType};
pub use day_stats::DayWorkStats;
pub use period::{ReportingPeriod, TimeRange};
pub use work_time_stats::{BucketTotals, WorkTimeStats};

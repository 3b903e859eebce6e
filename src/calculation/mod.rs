//! Calculation logic for the Work-Time Computation Engine.
//!
//! This module contains the pure computation pipeline: pairing IN/OUT clock
//! events into work intervals, lunch-window deduction, statutory half-hour
//! rounding, per-day bucket analysis, period aggregation, and statutory
//! violation checks.

mod aggregator;
mod day_analyzer;
mod lunch_break;
mod pairing;
mod rounding;
mod violations;

pub use aggregator::{compute_stats, is_weekend};
pub use day_analyzer::analyze_day;
pub use lunch_break::lunch_overlap_minutes;
pub use pairing::{WorkInterval, pair_events};
pub use rounding::statutory_round;
pub use violations::check_violations;

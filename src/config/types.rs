//! Configuration types for work-time rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{FixedOffset, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the work-time policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// The organizational timezone as minutes east of UTC.
    ///
    /// All calendar decisions (date grouping, weekend detection, the lunch
    /// window) use this single fixed offset to avoid off-by-one-day
    /// boundary errors.
    pub utc_offset_minutes: i32,
}

/// Daily work-time bucket thresholds, in hours.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkTimeThresholds {
    /// Regular hours per weekday before overtime starts.
    pub weekday_regular_hours: Decimal,
    /// Cap on tier-1 overtime (the first overtime hours of a day).
    pub overtime_tier1_cap_hours: Decimal,
    /// Cap on tier-2 overtime on a weekday.
    pub weekday_tier2_cap_hours: Decimal,
    /// Cap on tier-2 overtime on a weekend day.
    pub weekend_tier2_cap_hours: Decimal,
    /// Daily work-time limit; time beyond it is the "exceed" bucket.
    pub daily_limit_hours: Decimal,
}

/// The fixed daily lunch window.
///
/// Paired work intervals overlapping this window have the overlap deducted.
/// The window is anchored to the calendar date of the interval's IN punch.
#[derive(Debug, Clone, Deserialize)]
pub struct LunchWindow {
    /// Start of the lunch window (local wall-clock time).
    pub start: NaiveTime,
    /// End of the lunch window (local wall-clock time).
    pub end: NaiveTime,
}

/// Period-level violation thresholds, in hours.
#[derive(Debug, Clone, Deserialize)]
pub struct ViolationCaps {
    /// Weekday work hours allowed per week.
    pub weekly_hours_cap: Decimal,
    /// Total overtime hours allowed per month.
    pub monthly_overtime_cap: Decimal,
}

/// Thresholds configuration from thresholds.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    /// Daily bucket thresholds.
    pub work_time: WorkTimeThresholds,
    /// The lunch deduction window.
    pub lunch_break: LunchWindow,
    /// Period-level violation caps.
    pub violations: ViolationCaps,
}

/// The complete work-time rules loaded from YAML files.
#[derive(Debug, Clone)]
pub struct WorkTimeRules {
    metadata: PolicyMetadata,
    thresholds: ThresholdsConfig,
    timezone: FixedOffset,
}

impl WorkTimeRules {
    /// Creates rules from their component parts.
    ///
    /// Returns `None` if the configured UTC offset is out of range
    /// (beyond ±24 hours).
    pub fn new(metadata: PolicyMetadata, thresholds: ThresholdsConfig) -> Option<Self> {
        let offset_seconds = metadata.utc_offset_minutes.checked_mul(60)?;
        let timezone = FixedOffset::east_opt(offset_seconds)?;
        Some(Self {
            metadata,
            thresholds,
            timezone,
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the thresholds configuration.
    pub fn thresholds(&self) -> &ThresholdsConfig {
        &self.thresholds
    }

    /// Returns the organizational timezone as a fixed offset.
    pub fn timezone(&self) -> FixedOffset {
        self.timezone
    }
}

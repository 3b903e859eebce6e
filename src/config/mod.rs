//! Configuration for the Work-Time Computation Engine.
//!
//! Statutory thresholds, the lunch window, and the organizational timezone
//! are loaded from YAML files rather than hard-coded, so a deployment can
//! adjust them without a rebuild.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    LunchWindow, PolicyMetadata, ThresholdsConfig, ViolationCaps, WorkTimeRules,
    WorkTimeThresholds,
};

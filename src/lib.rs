//! Work-Time Computation Engine for employee attendance records.
//!
//! This crate pairs raw clock IN/OUT events, deducts the fixed lunch window,
//! splits worked time into regular and tiered overtime buckets under statutory
//! rules, and aggregates per-day results over a reporting period with
//! violation detection.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

//! Stable DTOs and IDs used across the indentguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted findings and verdicts
//! - stable string IDs and codes for the indent checks

#![forbid(unsafe_code)]

pub mod finding;
pub mod ids;

pub use finding::{Finding, Location, Severity, Verdict, SCHEMA_REPORT_V1};

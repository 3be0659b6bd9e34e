//! Conformance harness for miniprintf.
//!
//! This crate provides:
//! - Fixture capture: record host `snprintf` behavior for the case catalog as JSON
//! - Fixture verify: replay fixtures against the engine, output and count both
//! - Report generation: markdown and JSON conformance reports
//! - Structured JSONL logs plus a SHA-256 artifact index for each run

#![forbid(unsafe_code)]

pub mod capture;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};

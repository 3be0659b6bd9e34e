//! Test execution engine.

use std::time::Instant;

use miniprintf_conformance::execute_fixture_case;

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| execute_case(case).0)
            .collect()
    }

    /// Like [`TestRunner::run`], emitting one `case_result` event per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let start = log
            .entry(LogLevel::Info, "set_start")
            .with_details(serde_json::json!({
                "campaign": self.campaign,
                "family": fixture_set.family,
                "cases": fixture_set.cases.len(),
            }));
        log.emit_entry(start)?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let (result, latency_ns) = execute_case(case);
            let (level, outcome) = match (result.passed, result.actual_count) {
                (true, _) => (LogLevel::Info, Outcome::Pass),
                (false, Some(_)) => (LogLevel::Warn, Outcome::Fail),
                (false, None) => (LogLevel::Error, Outcome::Error),
            };
            let mut entry = log
                .entry(level, "case_result")
                .with_case(&case.name, &case.function)
                .with_outcome(outcome)
                .with_counts(result.actual_count, case.expected_count)
                .with_latency_ns(latency_ns);
            if let Some(diff) = &result.diff {
                entry = entry.with_details(serde_json::json!({ "diff": diff }));
            }
            log.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }
}

fn execute_case(case: &FixtureCase) -> (VerificationResult, u64) {
    let started = Instant::now();
    let execution = execute_fixture_case(&case.function, &case.inputs);
    let elapsed = started.elapsed().as_nanos();
    let latency_ns = u64::try_from(elapsed).unwrap_or(u64::MAX);

    let (actual, actual_count, diff_out) = match execution {
        Ok(run) => {
            let mut notes = Vec::new();
            if case.host_defined && !run.host_parity {
                notes.push(format!(
                    "host parity mismatch: host={:?} ({:?}), impl={} ({})",
                    run.host_output, run.host_count, run.impl_output, run.impl_count
                ));
            }
            if run.impl_count != case.expected_count {
                notes.push(format!(
                    "count mismatch: expected={}, actual={}",
                    case.expected_count, run.impl_count
                ));
            }

            let diff_out = if run.impl_output != case.expected_output {
                let mut text = diff::render_diff(&case.expected_output, &run.impl_output);
                for note in &notes {
                    text.push('\n');
                    text.push_str(note);
                }
                Some(text)
            } else if !notes.is_empty() {
                Some(notes.join("\n"))
            } else {
                None
            };
            (run.impl_output, Some(run.impl_count), diff_out)
        }
        Err(err) => {
            let actual = format!("unsupported:{err}");
            let diff_out = Some(diff::render_diff(&case.expected_output, &actual));
            (actual, None, diff_out)
        }
    };

    let passed = actual == case.expected_output
        && actual_count == Some(case.expected_count)
        && diff_out.is_none();
    let result = VerificationResult {
        case_name: case.name.clone(),
        spec_section: case.spec_section.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual,
        expected_count: case.expected_count,
        actual_count,
        diff: diff_out,
    };
    (result, latency_ns)
}

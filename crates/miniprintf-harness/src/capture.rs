//! Host fixture capture.
//!
//! Runs the case catalog against the host C library and serializes inputs and
//! outputs as a fixture set for later verification. Cases the host leaves
//! undefined record the engine's own output so they still guard regressions.

use miniprintf_conformance::{
    CatalogCase, HostRender, PRINTF_FUNCTION, escape_bytes, execute_inputs, host_render,
    printf_cases,
};

use crate::HarnessError;
use crate::fixtures::{FIXTURE_VERSION, FixtureCase, FixtureSet};
use crate::structured_log::now_utc;

/// Family name used for printf fixture sets.
pub const PRINTF_FAMILY: &str = "stdio/printf";

/// Capture one catalog case.
pub fn capture_case(case: &CatalogCase) -> Result<FixtureCase, HarnessError> {
    let args = case.inputs.engine_args();
    let (expected_output, expected_count, host_defined) =
        match host_render(case.inputs.format.as_bytes(), &args)? {
            HostRender::Defined { output, count } => (escape_bytes(&output), count, true),
            HostRender::Undefined { .. } => {
                let run = execute_inputs(&case.inputs)?;
                (run.impl_output, run.impl_count, false)
            }
        };
    Ok(FixtureCase {
        name: case.name.to_string(),
        function: PRINTF_FUNCTION.to_string(),
        spec_section: case.spec_section.to_string(),
        inputs: serde_json::to_value(&case.inputs)?,
        expected_output,
        expected_count,
        host_defined,
    })
}

/// Capture the full catalog as a fixture set.
pub fn capture_printf_fixtures(captured_at: Option<String>) -> Result<FixtureSet, HarnessError> {
    let cases = printf_cases()
        .iter()
        .map(capture_case)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: PRINTF_FAMILY.to_string(),
        captured_at: captured_at.unwrap_or_else(now_utc),
        cases,
    })
}

//! Differential execution of miniprintf against the host C library.
//!
//! Every fixture case runs twice: once through the miniprintf engine and once
//! through the host `snprintf`. Output bytes and returned counts are compared;
//! cases the host leaves undefined are executed on our side only and flagged.

pub mod args;
pub mod catalog;
pub mod host;

use miniprintf_core::stdio::CountingSink;
use thiserror::Error;

pub use args::{FixtureArg, PrintfInputs};
pub use catalog::{CatalogCase, printf_cases};
pub use host::{HostRender, host_render};

/// The function name fixture cases use for the engine.
pub const PRINTF_FUNCTION: &str = "ft_printf";

#[derive(Debug, Error)]
pub enum ConformanceError {
    #[error("unsupported function '{0}'")]
    UnsupportedFunction(String),
    #[error("invalid inputs: {0}")]
    InvalidInputs(#[from] serde_json::Error),
    #[error("string argument contains an interior NUL byte")]
    InteriorNul,
    #[error("host snprintf failed with {0}")]
    HostFailure(i32),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of running one case on both implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferentialExecution {
    /// Escaped engine output.
    pub impl_output: String,
    /// Count the engine returned.
    pub impl_count: usize,
    /// Escaped host output, when the host behavior is defined.
    pub host_output: Option<String>,
    pub host_count: Option<usize>,
    /// Output and count agree with the host (vacuously true when undefined).
    pub host_parity: bool,
    pub note: Option<String>,
}

/// Run a fixture case through the engine and the host.
pub fn execute_fixture_case(
    function: &str,
    inputs: &serde_json::Value,
) -> Result<DifferentialExecution, ConformanceError> {
    if function != PRINTF_FUNCTION {
        return Err(ConformanceError::UnsupportedFunction(function.to_string()));
    }
    let inputs: PrintfInputs = serde_json::from_value(inputs.clone())?;
    execute_inputs(&inputs)
}

/// Run parsed inputs through the engine and the host.
pub fn execute_inputs(inputs: &PrintfInputs) -> Result<DifferentialExecution, ConformanceError> {
    let args = inputs.engine_args();

    let mut sink = CountingSink::new(Vec::new());
    let impl_count = miniprintf_core::ft_fprintf(&mut sink, &inputs.format, &args)?;
    let mut note = None;
    if impl_count != sink.written() {
        note = Some(format!(
            "count {impl_count} disagrees with {} bytes written",
            sink.written()
        ));
    }
    let impl_bytes = sink.into_inner();

    let run = match host_render(inputs.format.as_bytes(), &args)? {
        HostRender::Defined { output, count } => DifferentialExecution {
            host_parity: output == impl_bytes && count == impl_count,
            impl_output: escape_bytes(&impl_bytes),
            impl_count,
            host_output: Some(escape_bytes(&output)),
            host_count: Some(count),
            note,
        },
        HostRender::Undefined { reason } => DifferentialExecution {
            impl_output: escape_bytes(&impl_bytes),
            impl_count,
            host_output: None,
            host_count: None,
            host_parity: true,
            note: Some(note.map_or(format!("host undefined: {reason}"), |n| {
                format!("{n}; host undefined: {reason}")
            })),
        },
    };
    Ok(run)
}

/// Render bytes as fixture text: printable ASCII verbatim, `\\`, `\n`, `\t`,
/// and `\xHH` for everything else.
#[must_use]
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(char::from(b)),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out
}

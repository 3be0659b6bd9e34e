//! Serializable printf inputs.

use serde::{Deserialize, Serialize};

use miniprintf_core::Arg;

/// One argument as stored in fixture JSON, e.g. `{"int": -42}`,
/// `{"str": null}` or `{"ptr": 4096}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureArg {
    Int(i64),
    Uint(u64),
    Str(Option<String>),
    Ptr(u64),
}

impl FixtureArg {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            Self::Int(v) => Arg::SignedInt(*v),
            Self::Uint(v) => Arg::UnsignedInt(*v),
            Self::Str(s) => Arg::Str(s.as_deref().map(str::as_bytes)),
            Self::Ptr(addr) => Arg::Pointer(*addr as usize),
        }
    }
}

/// Inputs of a `ft_printf` fixture case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintfInputs {
    pub format: String,
    #[serde(default)]
    pub args: Vec<FixtureArg>,
}

impl PrintfInputs {
    pub fn new(format: impl Into<String>, args: Vec<FixtureArg>) -> Self {
        Self {
            format: format.into(),
            args,
        }
    }

    /// Engine view of the argument list.
    #[must_use]
    pub fn engine_args(&self) -> Vec<Arg<'_>> {
        self.args.iter().map(FixtureArg::as_arg).collect()
    }
}

//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::HarnessError;

/// Current fixture schema version.
pub const FIXTURE_VERSION: &str = "v1";

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested.
    pub function: String,
    /// C standard section or behavior reference.
    pub spec_section: String,
    /// Input parameters (format plus typed arguments).
    pub inputs: serde_json::Value,
    /// Expected output, escaped.
    pub expected_output: String,
    /// Expected return value.
    pub expected_count: usize,
    /// False when the expectation is our own output because the host
    /// behavior is undefined for this input.
    #[serde(default = "default_host_defined")]
    pub host_defined: bool,
}

fn default_host_defined() -> bool {
    true
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// Fixture files that failed to load, with the reason.
pub type SkippedFixtures = Vec<(PathBuf, HarnessError)>;

/// Load one fixture file, or every `*.json` file of a directory in name order.
///
/// Files in a directory that fail to parse are skipped and returned alongside
/// the loaded sets.
pub fn load_fixture_sets(path: &Path) -> Result<(Vec<FixtureSet>, SkippedFixtures), HarnessError> {
    if path.is_file() {
        return Ok((vec![FixtureSet::from_file(path)?], Vec::new()));
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();

    let mut sets = Vec::new();
    let mut skipped = Vec::new();
    for p in paths {
        match FixtureSet::from_file(&p) {
            Ok(set) => sets.push(set),
            Err(err) => skipped.push((p, err)),
        }
    }
    if sets.is_empty() {
        return Err(HarnessError::NoFixtures(path.to_path_buf()));
    }
    Ok((sets, skipped))
}

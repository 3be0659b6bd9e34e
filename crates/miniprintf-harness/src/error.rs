use std::path::PathBuf;

use miniprintf_conformance::ConformanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Conformance(#[from] ConformanceError),
    #[error("no fixture JSON files found in {}", .0.display())]
    NoFixtures(PathBuf),
    #[error("conformance verification failed: {failed} of {total} cases")]
    VerificationFailed { failed: usize, total: usize },
    #[error("artifacts changed after indexing: {}", .0.join(", "))]
    StaleArtifacts(Vec<String>),
}

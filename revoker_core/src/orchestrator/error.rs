use thiserror::Error;

use crate::error::DependencyError;
use crate::finding::FindingError;

pub type Result<T> = std::result::Result<T, RemediationError>;

/// Everything that can make an invocation fail.
///
/// Out-of-scope findings and findings with no disallowed members are not
/// errors; they surface as no-op outcomes instead.
#[derive(Debug, Error)]
pub enum RemediationError {
    #[error(transparent)]
    Finding(#[from] FindingError),

    #[error(transparent)]
    Dependency(#[from] DependencyError),
}

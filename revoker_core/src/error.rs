use thiserror::Error;

/// Failure of a call to an external collaborator. Retry and redelivery
/// decisions belong to the caller; the core never retries on its own.
#[derive(Debug, Error)]
pub enum DependencyError {
    #[error("failed to resolve ancestry: {0}")]
    Ancestry(String),

    #[error("failed to get policy: {0}")]
    PolicyRead(String),

    #[error("failed to set policy: {0}")]
    PolicyWrite(String),
}

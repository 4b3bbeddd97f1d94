use async_trait::async_trait;

use super::Policy;
use crate::error::DependencyError;

/// Resource-manager policy access consumed by the orchestrator.
///
/// `set_policy` replaces the resource's policy wholesale. Concurrency
/// control between racing writers (such as optimistic preconditions on a
/// policy version) lives behind the implementation; the core does not
/// verify it.
#[async_trait]
pub trait PolicyStore: Send + Sync {
    async fn get_policy(&self, resource_name: &str) -> Result<Policy, DependencyError>;

    async fn set_policy(
        &self,
        resource_name: &str,
        policy: &Policy,
    ) -> Result<(), DependencyError>;
}

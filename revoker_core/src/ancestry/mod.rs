//! Resource containment chains and the directory interface that supplies
//! them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DependencyError;

/// Kind of container appearing in an ancestry chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AncestorKind {
    Project,
    Folder,
    Organization,
}

/// One link in a resource's containment chain, ordered from the resource's
/// direct container outward to the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestor {
    pub kind: AncestorKind,
    pub id: String,
}

impl Ancestor {
    pub fn new(kind: AncestorKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// Resource-directory lookup consumed by the orchestrator.
///
/// Implementations own the actual traversal against the resource manager;
/// the core only reads the ordered result. An empty chain is valid and means
/// the resource has no folder containment.
#[async_trait]
pub trait AncestryResolver: Send + Sync {
    async fn resolve_ancestry(
        &self,
        resource_name: &str,
    ) -> Result<Vec<Ancestor>, DependencyError>;
}

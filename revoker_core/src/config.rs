use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-invocation remediation configuration: where the engine may act and
/// which principal domains it revokes.
///
/// Passed into each evaluation rather than held as global state, so
/// concurrent invocations can carry different tenant configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemediationScope {
    /// Folder IDs within which automated revocation is permitted.
    pub folder_ids: BTreeSet<String>,

    /// Domain suffixes whose principals are candidates for revocation.
    pub disallowed_domains: BTreeSet<String>,
}

impl RemediationScope {
    pub fn new<I, J>(folder_ids: I, disallowed_domains: J) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        J: IntoIterator,
        J::Item: Into<String>,
    {
        Self {
            folder_ids: folder_ids.into_iter().map(Into::into).collect(),
            disallowed_domains: disallowed_domains.into_iter().map(Into::into).collect(),
        }
    }
}

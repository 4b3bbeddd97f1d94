//! Composition of the remediation pipeline.

pub mod error;
pub mod outcome;

pub use error::{RemediationError, Result};
pub use outcome::{Outcome, Remediation};

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::ancestry::AncestryResolver;
use crate::config::RemediationScope;
use crate::finding::Finding;
use crate::policy::{diff, DiffOutcome, PolicyStore};
use crate::scope;

/// Drives one finding end-to-end: decode, gate on scope, select disallowed
/// members, recompute the policy, and ask the store to apply it.
///
/// Each call to [`Remediator::process`] is a pure function of the payload,
/// the scope, and the collaborators' responses; the remediator holds no
/// mutable state, so concurrent invocations on different resources need no
/// coordination. Racing invocations on the same resource are left to the
/// policy store's own concurrency control.
pub struct Remediator<A, P> {
    resolver: Arc<A>,
    policies: Arc<P>,
}

impl<A, P> Clone for Remediator<A, P> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            policies: self.policies.clone(),
        }
    }
}

impl<A, P> Remediator<A, P>
where
    A: AncestryResolver,
    P: PolicyStore,
{
    pub fn new(resolver: Arc<A>, policies: Arc<P>) -> Self {
        debug!("creating new remediator");
        Self { resolver, policies }
    }

    /// Process one raw finding payload under the given scope.
    ///
    /// Decode failures and collaborator failures surface as errors; every
    /// other early exit is a successful no-op outcome. No retries happen
    /// here; redelivery is the transport's job.
    pub async fn process(
        &self,
        payload: &[u8],
        scope: &RemediationScope,
    ) -> Result<Remediation> {
        let finding = Finding::from_payload(payload)?;
        debug!(
            "processing finding {}/{} on {}",
            finding.rule_name, finding.sub_rule_name, finding.affected_resource_name
        );

        let ancestry = self
            .resolver
            .resolve_ancestry(&finding.affected_resource_name)
            .await?;

        if !scope::in_scope(&ancestry, &scope.folder_ids) {
            info!(
                "resource {} outside configured folders, nothing to do",
                finding.affected_resource_name
            );
            return Ok(Remediation::new(&finding, Outcome::OutOfScope));
        }

        // Only members reported by this finding are candidates; disallowed
        // principals already on the policy but absent from the finding are
        // left alone.
        let remove: BTreeSet<String> = finding
            .external_members
            .iter()
            .filter(|member| scope::denylist::is_disallowed(member, &scope.disallowed_domains))
            .cloned()
            .collect();

        if remove.is_empty() {
            info!("no disallowed members in finding, nothing to do");
            return Ok(Remediation::new(&finding, Outcome::NoDisallowedMembers));
        }

        let current = self.policies.get_policy(&finding.project_id).await?;

        match diff::remove_members(&current, &remove) {
            DiffOutcome::Unchanged => {
                info!("removal set absent from live policy, skipping update");
                Ok(Remediation::new(&finding, Outcome::PolicyUnchanged))
            }
            DiffOutcome::Changed(updated) => {
                self.policies
                    .set_policy(&finding.project_id, &updated)
                    .await?;
                let removed: Vec<String> = remove.into_iter().collect();
                info!(
                    "revoked {} disallowed member(s) from {}",
                    removed.len(),
                    finding.project_id
                );
                Ok(Remediation::new(&finding, Outcome::Revoked { removed }))
            }
        }
    }
}

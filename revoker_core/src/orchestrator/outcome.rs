use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::finding::Finding;

/// How an invocation ended.
///
/// The no-op variants are successes. "Nothing to remediate" is an expected,
/// common case and callers need to tell it apart from "failed to check".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The policy was recomputed and the update was applied.
    Revoked { removed: Vec<String> },

    /// No configured folder contains the affected resource.
    OutOfScope,

    /// No member of the finding matched the disallowed-domain set.
    NoDisallowedMembers,

    /// The removal set did not intersect the live policy.
    PolicyUnchanged,
}

impl Outcome {
    /// True for every variant that left the policy untouched.
    pub fn is_noop(&self) -> bool {
        !matches!(self, Outcome::Revoked { .. })
    }
}

/// Record of one processed finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remediation {
    /// Unique identifier for this invocation.
    pub invocation_id: Uuid,

    /// When processing finished.
    pub timestamp: DateTime<Utc>,

    /// Detector rule that produced the finding.
    pub rule_name: String,

    /// Sub-rule within the detector rule.
    pub sub_rule_name: String,

    /// Resource the finding concerned.
    pub resource_name: String,

    pub outcome: Outcome,
}

impl Remediation {
    pub(crate) fn new(finding: &Finding, outcome: Outcome) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            rule_name: finding.rule_name.clone(),
            sub_rule_name: finding.sub_rule_name.clone(),
            resource_name: finding.affected_resource_name.clone(),
            outcome,
        }
    }
}

//! Decoding of detector findings from raw event payloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, FindingError>;

#[derive(Debug, Error)]
pub enum FindingError {
    #[error("failed to read finding: {0}")]
    Decode(String),
}

impl FindingError {
    fn unmarshal() -> Self {
        FindingError::Decode("failed to unmarshal".to_string())
    }
}

/// A detected anomalous access grant, decoded once and then immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Detector rule that fired, e.g. `iam_anomalous_grant`.
    pub rule_name: String,

    /// Sub-rule within the detector rule.
    pub sub_rule_name: String,

    /// Fully qualified name of the resource the grant was made on.
    pub affected_resource_name: String,

    /// Principals from outside the trusted domains, as reported.
    pub external_members: Vec<String>,

    /// Project the grant belongs to.
    pub project_id: String,
}

// Wire shapes for the inbound detection event. Field names follow the
// payload contract, not Rust convention.
#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "jsonPayload")]
    json_payload: RawPayload,
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    #[serde(rename = "detectionCategory")]
    detection_category: RawCategory,
    #[serde(rename = "affectedResources")]
    affected_resources: Vec<RawResource>,
    properties: RawProperties,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(rename = "ruleName")]
    rule_name: String,
    #[serde(rename = "subRuleName")]
    sub_rule_name: String,
}

#[derive(Debug, Deserialize)]
struct RawResource {
    #[serde(rename = "gcpResourceName")]
    gcp_resource_name: String,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    #[serde(default)]
    project_id: String,
    #[serde(rename = "externalMembers")]
    external_members: Vec<String>,
}

impl Finding {
    /// Decode a raw event payload into a finding.
    ///
    /// An empty payload, malformed JSON, or a payload missing any required
    /// field all report the same decode cause; no partial finding is ever
    /// returned.
    pub fn from_payload(payload: &[u8]) -> Result<Finding> {
        let event: RawEvent =
            serde_json::from_slice(payload).map_err(|_| FindingError::unmarshal())?;

        let resource = event
            .json_payload
            .affected_resources
            .into_iter()
            .next()
            .ok_or_else(FindingError::unmarshal)?;

        let finding = Finding {
            rule_name: event.json_payload.detection_category.rule_name,
            sub_rule_name: event.json_payload.detection_category.sub_rule_name,
            affected_resource_name: resource.gcp_resource_name,
            external_members: event.json_payload.properties.external_members,
            project_id: event.json_payload.properties.project_id,
        };

        debug!(
            "decoded finding for rule {} on {}",
            finding.rule_name, finding.affected_resource_name
        );
        Ok(finding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload(member: &str) -> Vec<u8> {
        format!(
            r#"{{
                "insertId": "eppsoda4",
                "jsonPayload": {{
                    "detectionCategory": {{
                        "subRuleName": "external_member_added_to_policy",
                        "ruleName": "iam_anomalous_grant"
                    }},
                    "affectedResources": [{{
                        "gcpResourceName": "//cloudresourcemanager.googleapis.com/projects/test-project-1"
                    }}],
                    "properties": {{
                        "project_id": "test-foo",
                        "externalMembers": ["{}"]
                    }}
                }},
                "logName": "projects/test-foo/logs/threatdetection.googleapis.com%2Fdetection"
            }}"#,
            member
        )
        .into_bytes()
    }

    #[test]
    fn test_decodes_valid_payload() {
        let finding = Finding::from_payload(&sample_payload("user:tom@gmail.com")).unwrap();

        assert_eq!(finding.rule_name, "iam_anomalous_grant");
        assert_eq!(finding.sub_rule_name, "external_member_added_to_policy");
        assert_eq!(
            finding.affected_resource_name,
            "//cloudresourcemanager.googleapis.com/projects/test-project-1"
        );
        assert_eq!(finding.external_members, vec!["user:tom@gmail.com"]);
        assert_eq!(finding.project_id, "test-foo");
    }

    #[test]
    fn test_empty_payload_is_a_decode_error() {
        let err = Finding::from_payload(b"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to read finding: failed to unmarshal"
        );
    }

    #[test]
    fn test_garbage_payload_is_a_decode_error() {
        let err = Finding::from_payload(b"not json at all").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to read finding: failed to unmarshal"
        );
    }

    #[test]
    fn test_missing_affected_resource_is_a_decode_error() {
        let payload = br#"{
            "jsonPayload": {
                "detectionCategory": {
                    "subRuleName": "external_member_added_to_policy",
                    "ruleName": "iam_anomalous_grant"
                },
                "affectedResources": [],
                "properties": {
                    "project_id": "test-foo",
                    "externalMembers": ["user:tom@gmail.com"]
                }
            }
        }"#;
        let err = Finding::from_payload(payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to read finding: failed to unmarshal"
        );
    }

    #[test]
    fn test_missing_external_members_is_a_decode_error() {
        let payload = br#"{
            "jsonPayload": {
                "detectionCategory": {
                    "subRuleName": "external_member_added_to_policy",
                    "ruleName": "iam_anomalous_grant"
                },
                "affectedResources": [{"gcpResourceName": "//example/projects/p"}],
                "properties": {
                    "project_id": "test-foo"
                }
            }
        }"#;
        assert!(Finding::from_payload(payload).is_err());
    }
}

//! Scope gating for remediation: a finding is only acted on when its
//! resource sits under one of the configured folders.

pub mod denylist;

use std::collections::BTreeSet;

use tracing::debug;

use crate::ancestry::{Ancestor, AncestorKind};

/// True iff any folder in the ancestry chain carries one of the configured
/// folder IDs. Position in the chain is irrelevant; only membership counts.
///
/// An unconfigured set matches nothing, so a deployment without folder
/// scope never remediates anything. Some deployments pass a lone empty
/// string instead of an empty set; both count as unconfigured.
pub fn in_scope(ancestry: &[Ancestor], folder_ids: &BTreeSet<String>) -> bool {
    if !folders_configured(folder_ids) {
        debug!("no folder scope configured, remediation disabled");
        return false;
    }

    ancestry
        .iter()
        .any(|ancestor| ancestor.kind == AncestorKind::Folder && folder_ids.contains(&ancestor.id))
}

fn folders_configured(folder_ids: &BTreeSet<String>) -> bool {
    folder_ids.iter().any(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folders(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn chain(folder_id: &str) -> Vec<Ancestor> {
        vec![
            Ancestor::new(AncestorKind::Project, "projectID"),
            Ancestor::new(AncestorKind::Folder, folder_id),
            Ancestor::new(AncestorKind::Organization, "organizationID"),
        ]
    }

    #[test]
    fn test_matching_folder_is_in_scope() {
        assert!(in_scope(&chain("folderID"), &folders(&["folderID"])));
    }

    #[test]
    fn test_any_configured_folder_matches() {
        assert!(in_scope(
            &chain("folderID1"),
            &folders(&["folderID", "folderID1"])
        ));
    }

    #[test]
    fn test_unknown_folder_is_out_of_scope() {
        assert!(!in_scope(
            &chain("anotherfolderID"),
            &folders(&["folderID", "folderID1"])
        ));
    }

    #[test]
    fn test_empty_ancestry_is_out_of_scope() {
        assert!(!in_scope(&[], &folders(&["folderID"])));
    }

    #[test]
    fn test_empty_configuration_matches_nothing() {
        assert!(!in_scope(&chain("folderID"), &BTreeSet::new()));
    }

    #[test]
    fn test_empty_string_sentinel_matches_nothing() {
        assert!(!in_scope(&chain("folderID"), &folders(&[""])));
    }

    #[test]
    fn test_project_id_never_satisfies_folder_scope() {
        // A project whose ID collides with a configured folder ID must not
        // put the finding in scope.
        let ancestry = vec![Ancestor::new(AncestorKind::Project, "folderID")];
        assert!(!in_scope(&ancestry, &folders(&["folderID"])));
    }
}

use std::collections::BTreeSet;

use tracing::debug;

use super::{Binding, Policy};

/// Result of recomputing a policy against a removal set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// At least one binding lost a member; this policy should replace the
    /// current one.
    Changed(Policy),

    /// The removal set did not intersect any binding; there is nothing to
    /// apply.
    Unchanged,
}

/// Produce a policy with every member of `remove` dropped from every
/// binding.
///
/// Roles are copied untouched and surviving members keep their relative
/// order. A binding emptied by the removal is retained with no members;
/// bindings are never dropped here. Running the same removal against an
/// already-diffed policy yields `Unchanged`.
pub fn remove_members(policy: &Policy, remove: &BTreeSet<String>) -> DiffOutcome {
    let mut changed = false;

    let bindings = policy
        .bindings
        .iter()
        .map(|binding| {
            let members: Vec<String> = binding
                .members
                .iter()
                .filter(|member| !remove.contains(*member))
                .cloned()
                .collect();

            if members.len() != binding.members.len() {
                changed = true;
            }

            Binding {
                role: binding.role.clone(),
                members,
            }
        })
        .collect();

    if changed {
        DiffOutcome::Changed(Policy { bindings })
    } else {
        debug!("removal set did not intersect any binding");
        DiffOutcome::Unchanged
    }
}

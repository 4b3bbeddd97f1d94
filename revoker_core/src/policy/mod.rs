//! IAM policy data model and the diff engine that recomputes it.

pub mod diff;
pub mod store;

pub use diff::{remove_members, DiffOutcome};
pub use store::PolicyStore;

use serde::{Deserialize, Serialize};

/// A role-to-principals grant within a policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub role: String,
    pub members: Vec<String>,
}

impl Binding {
    pub fn new(role: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            role: role.into(),
            members,
        }
    }
}

/// Access-control state of a resource at a point in time.
///
/// The policy store is the system of record; instances held here are
/// snapshots, fetched and replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub bindings: Vec<Binding>,
}

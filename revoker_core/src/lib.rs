pub mod ancestry;
pub mod config;
pub mod error;
pub mod finding;
pub mod orchestrator;
pub mod policy;
pub mod scope;
pub mod stubs;

pub use ancestry::{Ancestor, AncestorKind, AncestryResolver};
pub use config::RemediationScope;
pub use error::DependencyError;
pub use finding::Finding;
pub use orchestrator::{Outcome, Remediation, RemediationError, Remediator};
pub use policy::{Binding, Policy, PolicyStore};

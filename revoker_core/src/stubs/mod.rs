//! In-memory collaborator fakes for exercising the pipeline without a live
//! resource manager.
//!
//! Hosts embedding the engine can use these to test their wiring the same
//! way this crate's own integration tests do.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ancestry::{Ancestor, AncestryResolver};
use crate::error::DependencyError;
use crate::policy::{Policy, PolicyStore};

/// Ancestry resolver with a canned response.
#[derive(Debug, Default)]
pub struct StubResolver {
    ancestry: Vec<Ancestor>,
    fail_with: Option<String>,
}

impl StubResolver {
    pub fn returning(ancestry: Vec<Ancestor>) -> Self {
        Self {
            ancestry,
            fail_with: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            ancestry: Vec::new(),
            fail_with: Some(message.into()),
        }
    }
}

#[async_trait]
impl AncestryResolver for StubResolver {
    async fn resolve_ancestry(
        &self,
        _resource_name: &str,
    ) -> Result<Vec<Ancestor>, DependencyError> {
        match &self.fail_with {
            Some(message) => Err(DependencyError::Ancestry(message.clone())),
            None => Ok(self.ancestry.clone()),
        }
    }
}

/// Policy store that serves a canned policy and records the last policy
/// written through it.
#[derive(Debug, Default)]
pub struct StubPolicyStore {
    policy: Policy,
    fail_get: Option<String>,
    fail_set: Option<String>,
    saved: Mutex<Option<Policy>>,
}

impl StubPolicyStore {
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn failing_get(message: impl Into<String>) -> Self {
        Self {
            fail_get: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn failing_set(policy: Policy, message: impl Into<String>) -> Self {
        Self {
            policy,
            fail_set: Some(message.into()),
            ..Default::default()
        }
    }

    /// Policy most recently passed to `set_policy`, if any call was made.
    pub fn saved(&self) -> Option<Policy> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl PolicyStore for StubPolicyStore {
    async fn get_policy(&self, _resource_name: &str) -> Result<Policy, DependencyError> {
        match &self.fail_get {
            Some(message) => Err(DependencyError::PolicyRead(message.clone())),
            None => Ok(self.policy.clone()),
        }
    }

    async fn set_policy(
        &self,
        _resource_name: &str,
        policy: &Policy,
    ) -> Result<(), DependencyError> {
        if let Some(message) = &self.fail_set {
            return Err(DependencyError::PolicyWrite(message.clone()));
        }
        *self.saved.lock().unwrap() = Some(policy.clone());
        Ok(())
    }
}

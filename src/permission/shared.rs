// ABOUTME: Implements SharedRegistry - a cloneable, lock-guarded Registry handle.
// ABOUTME: Writers take the lock exclusively; checks share a read lock.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Registry, Verdict};
use crate::grants::GrantsFile;

/// A thread-safe handle to a [`Registry`].
///
/// Clones share the same underlying registry.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    /// Create a handle around an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an inclusion and/or an exclusion for a distributor.
    pub async fn add_permission(&self, distributor: &str, include: &str, exclude: &str) {
        let mut registry = self.inner.write().await;
        registry.add_permission(distributor, include, exclude);
    }

    /// Whether `distributor` may distribute in `region`.
    pub async fn check_permission(&self, distributor: &str, region: &str) -> bool {
        let registry = self.inner.read().await;
        registry.check_permission(distributor, region)
    }

    /// Check a region and report why it was or wasn't granted.
    pub async fn explain(&self, distributor: &str, region: &str) -> Verdict {
        let registry = self.inner.read().await;
        registry.explain(distributor, region)
    }

    /// List all distributor ids, sorted alphabetically.
    pub async fn distributors(&self) -> Vec<String> {
        let registry = self.inner.read().await;
        registry.distributors()
    }

    /// Replay a grant file into the registry under one write lock.
    pub async fn apply_grants(&self, grants: &GrantsFile) {
        let mut registry = self.inner.write().await;
        registry.apply_grants(grants);
    }

    /// Copy of the registry as it is right now.
    pub async fn snapshot(&self) -> Registry {
        let registry = self.inner.read().await;
        registry.clone()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl Clone for SharedRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

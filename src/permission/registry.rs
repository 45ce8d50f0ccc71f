// ABOUTME: Implements the Registry - distributor rights keyed by distributor id.
// ABOUTME: Exact-match lookups only; exclusions always beat inclusions.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{PermissionRecord, Verdict};

/// Include and exclude sets for every known distributor.
///
/// The registry is owned by its caller; wrap it in a
/// [`SharedRegistry`](super::SharedRegistry) to share it between tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: HashMap<String, PermissionRecord>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Record an inclusion and/or an exclusion for a distributor.
    ///
    /// The distributor's record is created on first use, even if both
    /// regions are empty. An empty region string means "nothing to add".
    pub fn add_permission(&mut self, distributor: &str, include: &str, exclude: &str) {
        let record = self.records.entry(distributor.to_string()).or_insert_with(|| {
            debug!(distributor, "created permission record");
            PermissionRecord::new()
        });

        if !include.is_empty() && record.include(include) {
            debug!(distributor, region = include, "included region");
        }
        if !exclude.is_empty() && record.exclude(exclude) {
            debug!(distributor, region = exclude, "excluded region");
        }
    }

    /// Whether `distributor` may distribute in `region`.
    pub fn check_permission(&self, distributor: &str, region: &str) -> bool {
        self.explain(distributor, region).is_granted()
    }

    /// Check a region and report why it was or wasn't granted.
    pub fn explain(&self, distributor: &str, region: &str) -> Verdict {
        let verdict = match self.records.get(distributor) {
            Some(record) => record.verdict(region),
            None => Verdict::UnknownDistributor,
        };
        trace!(distributor, region, %verdict, "checked permission");
        verdict
    }

    /// Get a distributor's record.
    pub fn record(&self, distributor: &str) -> Option<&PermissionRecord> {
        self.records.get(distributor)
    }

    /// Whether the distributor has a record.
    pub fn contains(&self, distributor: &str) -> bool {
        self.records.contains_key(distributor)
    }

    /// List all distributor ids, sorted alphabetically.
    pub fn distributors(&self) -> Vec<String> {
        let mut names: Vec<_> = self.records.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over every distributor and its record, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PermissionRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of distributors with a record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builder for constructing registries.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    /// Create a new builder with no distributors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant a region to a distributor.
    pub fn include(mut self, distributor: &str, region: &str) -> Self {
        self.registry.add_permission(distributor, region, "");
        self
    }

    /// Withhold a region from a distributor.
    pub fn exclude(mut self, distributor: &str, region: &str) -> Self {
        self.registry.add_permission(distributor, "", region);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        self.registry
    }
}

// ABOUTME: Defines PermissionRecord - one distributor's include and exclude sets.
// ABOUTME: Regions are opaque strings compared by exact equality.

use std::collections::HashSet;

use super::Verdict;

/// The regions explicitly granted to and withheld from one distributor.
///
/// A region may sit in both sets at once; [`PermissionRecord::verdict`]
/// resolves that in favor of the exclusion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionRecord {
    include: HashSet<String>,
    exclude: HashSet<String>,
}

impl PermissionRecord {
    /// Create a record with no included or excluded regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region to the include set. Returns false if it was already there.
    pub fn include(&mut self, region: impl Into<String>) -> bool {
        self.include.insert(region.into())
    }

    /// Add a region to the exclude set. Returns false if it was already there.
    pub fn exclude(&mut self, region: impl Into<String>) -> bool {
        self.exclude.insert(region.into())
    }

    /// Whether `region` is literally in the include set.
    pub fn includes(&self, region: &str) -> bool {
        self.include.contains(region)
    }

    /// Whether `region` is literally in the exclude set.
    pub fn excludes(&self, region: &str) -> bool {
        self.exclude.contains(region)
    }

    /// Resolve a region against this record.
    pub fn verdict(&self, region: &str) -> Verdict {
        if self.excludes(region) {
            Verdict::Excluded
        } else if self.includes(region) {
            Verdict::Granted
        } else {
            Verdict::NotIncluded
        }
    }

    /// Whether this record grants `region`.
    pub fn permits(&self, region: &str) -> bool {
        self.verdict(region).is_granted()
    }

    /// Included regions, sorted.
    pub fn included(&self) -> Vec<String> {
        sorted(&self.include)
    }

    /// Excluded regions, sorted.
    pub fn excluded(&self) -> Vec<String> {
        sorted(&self.exclude)
    }

    /// True when neither set holds anything.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

fn sorted(set: &HashSet<String>) -> Vec<String> {
    let mut regions: Vec<_> = set.iter().cloned().collect();
    regions.sort();
    regions
}

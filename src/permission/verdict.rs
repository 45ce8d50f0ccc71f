// ABOUTME: Defines Verdict - the outcome of checking a region for a distributor.
// ABOUTME: Only Verdict::Granted counts as permission.

use std::fmt;

/// The outcome of a permission check, with the reason for a refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The region is included and not excluded.
    Granted,
    /// The distributor has no record at all.
    UnknownDistributor,
    /// The distributor has a record but never included this region.
    NotIncluded,
    /// The region is in the distributor's exclude set.
    Excluded,
}

impl Verdict {
    /// Whether this verdict grants the region.
    pub fn is_granted(self) -> bool {
        matches!(self, Verdict::Granted)
    }

    /// Short lowercase name, used for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Granted => "granted",
            Verdict::UnknownDistributor => "unknown-distributor",
            Verdict::NotIncluded => "not-included",
            Verdict::Excluded => "excluded",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_granted()
    }
}

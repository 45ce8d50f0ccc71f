// ABOUTME: Grant files - JSON description of every distributor's rights.
// ABOUTME: Loads into a Registry by replaying add_permission, exports sorted.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::GrantsError;
use crate::permission::Registry;

/// Regions granted to and withheld from one distributor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorGrants {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// On-disk form of a registry.
///
/// ```json
/// { "distributors": { "D1": { "include": ["INDIA"], "exclude": ["KARNATAKA-INDIA"] } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantsFile {
    #[serde(default)]
    pub distributors: BTreeMap<String, DistributorGrants>,
}

impl GrantsFile {
    /// Read and parse a grant file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GrantsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| GrantsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grants: Self = serde_json::from_str(&contents).map_err(|source| GrantsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            distributors = grants.distributors.len(),
            "loaded grant file"
        );
        Ok(grants)
    }

    /// Parse grants from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GrantsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the grants to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GrantsError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| GrantsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "saved grant file");
        Ok(())
    }
}

impl Registry {
    /// Build a registry from a grant file.
    pub fn from_grants(grants: &GrantsFile) -> Self {
        let mut registry = Self::new();
        registry.apply_grants(grants);
        registry
    }

    /// Replay every entry of a grant file through [`Registry::add_permission`].
    ///
    /// Distributors listed with no regions still get an (empty) record.
    pub fn apply_grants(&mut self, grants: &GrantsFile) {
        for (distributor, entry) in &grants.distributors {
            self.add_permission(distributor, "", "");
            for region in &entry.include {
                self.add_permission(distributor, region, "");
            }
            for region in &entry.exclude {
                self.add_permission(distributor, "", region);
            }
        }
    }

    /// Export the registry, sorted by distributor and region.
    pub fn to_grants(&self) -> GrantsFile {
        let distributors = self
            .iter()
            .map(|(name, record)| {
                let entry = DistributorGrants {
                    include: record.included(),
                    exclude: record.excluded(),
                };
                (name.to_string(), entry)
            })
            .collect();
        GrantsFile { distributors }
    }
}

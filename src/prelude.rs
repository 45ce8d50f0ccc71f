// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use territory::prelude::*;` to get started quickly.

pub use crate::error::{GrantsError, TerritoryError};
pub use crate::grants::{DistributorGrants, GrantsFile};
pub use crate::permission::{
    PermissionRecord, Registry, RegistryBuilder, SharedRegistry, Verdict,
};

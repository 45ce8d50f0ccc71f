// ABOUTME: Root module for territory - per-distributor region rights.
// ABOUTME: Re-exports the registry, grant files, and error types.

pub mod error;
pub mod grants;
pub mod permission;
pub mod prelude;

pub use error::TerritoryError;

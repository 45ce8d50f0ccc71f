// ABOUTME: Permission module - distributor rights registry and checks.
// ABOUTME: Holds include/exclude sets per distributor, exact-match lookups.

mod record;
mod registry;
mod shared;
mod verdict;

pub use record::*;
pub use registry::*;
pub use shared::*;
pub use verdict::*;

//! Tenant/partition visibility resolution.
//!
//! Every data access in the engine flows through one derived [`Scope`];
//! no other component may decide visibility on its own. This centralizes
//! the "super-admin flag, else tenant id, else nothing" rule that would
//! otherwise be duplicated at every call site.

pub mod service;
pub mod types;

pub use service::ScopeResolver;
pub use types::{ProfilePartition, Scope};

//! The row-access contract consumed by the engine.

use async_trait::async_trait;

use super::error::RepositoryError;
use super::types::{LedgerRecord, RecordKind};
use crate::scope::Scope;

/// Supplies raw dated monetary records filtered by a scope.
///
/// Contract the engine relies on:
/// - `Scope::Empty` returns an empty vec without touching the backing
///   store.
/// - `Scope::Unrestricted` returns every record of the kind across all
///   tenants and partitions.
/// - `Scope::Tenant` returns only rows matching both the tenant and the
///   partition.
/// - Ordering of the returned records is unspecified; the engine never
///   assumes sortedness.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Fetches all records of `kind` visible under `scope`.
    async fn fetch(
        &self,
        scope: &Scope,
        kind: RecordKind,
    ) -> Result<Vec<LedgerRecord>, RepositoryError>;
}

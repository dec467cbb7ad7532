//! In-memory ledger store for Moneta.
//!
//! Persistent storage is an external collaborator; this crate exists so
//! the repository contract has a real, thread-safe implementation for
//! development, the preview binary, and scope-contract tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use moneta_core::ledger::{LedgerRecord, LedgerRepository, RecordKind, RepositoryError};
use moneta_core::scope::Scope;

/// A thread-safe in-memory row store honoring the scope contract.
///
/// - `Scope::Empty` returns no rows without scanning anything.
/// - `Scope::Unrestricted` returns every row of the kind, all tenants,
///   both partitions.
/// - `Scope::Tenant` filters on tenant and partition together.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    rows: RwLock<Vec<LedgerRecord>>,
}

impl MemoryLedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts one record.
    pub async fn insert(&self, record: LedgerRecord) {
        self.rows.write().await.push(record);
    }

    /// Inserts a batch of records.
    pub async fn insert_all(&self, records: impl IntoIterator<Item = LedgerRecord>) {
        self.rows.write().await.extend(records);
    }

    /// Number of rows currently held.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns true if the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl LedgerRepository for MemoryLedgerStore {
    async fn fetch(
        &self,
        scope: &Scope,
        kind: RecordKind,
    ) -> Result<Vec<LedgerRecord>, RepositoryError> {
        // Empty scope short-circuits before touching the rows at all.
        if scope.is_empty() {
            debug!(%kind, "empty scope, skipping scan");
            return Ok(Vec::new());
        }

        let rows = self.rows.read().await;
        let matched: Vec<LedgerRecord> = rows
            .iter()
            .filter(|record| record.kind == kind)
            .filter(|record| match scope {
                Scope::Unrestricted => true,
                Scope::Tenant {
                    tenant_id,
                    partition,
                } => record.tenant_id == *tenant_id && record.partition == *partition,
                // Handled above; kept exhaustive for the compiler.
                Scope::Empty => false,
            })
            .cloned()
            .collect();

        debug!(%kind, ?scope, rows = matched.len(), "fetched rows");
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use moneta_core::scope::ProfilePartition;
    use moneta_shared::types::{RecordId, TenantId};

    fn record(
        tenant_id: TenantId,
        partition: ProfilePartition,
        kind: RecordKind,
        amount: Decimal,
    ) -> LedgerRecord {
        LedgerRecord {
            id: RecordId::new(),
            tenant_id,
            partition,
            kind,
            category: None,
            amount,
            occurred_on: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
        }
    }

    async fn seeded_store(tenant_a: TenantId, tenant_b: TenantId) -> MemoryLedgerStore {
        let store = MemoryLedgerStore::new();
        store
            .insert_all([
                record(tenant_a, ProfilePartition::Personal, RecordKind::Income, dec!(100)),
                record(tenant_a, ProfilePartition::Business, RecordKind::Income, dec!(200)),
                record(tenant_a, ProfilePartition::Personal, RecordKind::Expense, dec!(30)),
                record(tenant_b, ProfilePartition::Personal, RecordKind::Income, dec!(400)),
            ])
            .await;
        store
    }

    #[tokio::test]
    async fn test_tenant_scope_filters_tenant_and_partition() {
        let tenant_a = TenantId::new();
        let tenant_b = TenantId::new();
        let store = seeded_store(tenant_a, tenant_b).await;

        let scope = Scope::Tenant {
            tenant_id: tenant_a,
            partition: ProfilePartition::Personal,
        };
        let rows = store.fetch(&scope, RecordKind::Income).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, dec!(100));
    }

    #[tokio::test]
    async fn test_unrestricted_scope_unions_all_tenants_and_partitions() {
        let tenant_a = TenantId::new();
        let tenant_b = TenantId::new();
        let store = seeded_store(tenant_a, tenant_b).await;

        let rows = store
            .fetch(&Scope::Unrestricted, RecordKind::Income)
            .await
            .unwrap();

        let total: Decimal = rows.iter().map(|r| r.amount).sum();
        assert_eq!(rows.len(), 3);
        assert_eq!(total, dec!(700));
    }

    #[tokio::test]
    async fn test_empty_scope_returns_nothing() {
        let tenant_a = TenantId::new();
        let store = seeded_store(tenant_a, TenantId::new()).await;

        let rows = store.fetch(&Scope::Empty, RecordKind::Income).await.unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_filters_by_kind() {
        let tenant_a = TenantId::new();
        let store = seeded_store(tenant_a, TenantId::new()).await;

        let scope = Scope::Tenant {
            tenant_id: tenant_a,
            partition: ProfilePartition::Personal,
        };
        let rows = store.fetch(&scope, RecordKind::Expense).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RecordKind::Expense);
    }

    #[tokio::test]
    async fn test_other_tenant_rows_never_leak() {
        let tenant_a = TenantId::new();
        let tenant_b = TenantId::new();
        let store = seeded_store(tenant_a, tenant_b).await;

        let scope = Scope::Tenant {
            tenant_id: tenant_b,
            partition: ProfilePartition::Personal,
        };
        let rows = store.fetch(&scope, RecordKind::Income).await.unwrap();

        assert!(rows.iter().all(|r| r.tenant_id == tenant_b));
        assert_eq!(rows.len(), 1);
    }
}

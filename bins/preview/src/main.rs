//! Report preview binary for Moneta development and testing.
//!
//! Seeds an in-memory ledger store with deterministic sample rows for
//! two tenants, builds one tenant-scoped report and one super-admin
//! report, and prints both snapshots as JSON.
//!
//! Usage: cargo run --bin preview

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use moneta_core::ledger::{CategoryRef, LedgerRecord, RecordKind, SystemClock};
use moneta_core::report::{ReportRequest, ReportService};
use moneta_core::scope::ProfilePartition;
use moneta_shared::{AppConfig, Identity};
use moneta_shared::types::{CategoryId, RecordId, TenantId, UserId};
use moneta_store_memory::MemoryLedgerStore;

/// Sample tenant A (consistent for all seeds)
const TENANT_A_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Sample tenant B (consistent for all seeds)
const TENANT_B_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Sample user bound to tenant A
const USER_A_ID: &str = "00000000-0000-0000-0000-000000000011";
/// Sample super-admin user
const ADMIN_ID: &str = "00000000-0000-0000-0000-000000000099";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        default_window_months = config.reporting.default_window_months,
        "configuration loaded"
    );

    let store = MemoryLedgerStore::new();
    seed_sample_rows(&store).await?;
    info!(rows = store.len().await, "seeded sample ledger");

    let service = ReportService::new(
        Arc::new(store),
        Arc::new(SystemClock),
        config.reporting,
    );

    let user = Identity::for_tenant(
        UserId::from_uuid(Uuid::parse_str(USER_A_ID)?),
        TenantId::from_uuid(Uuid::parse_str(TENANT_A_ID)?),
    );
    let mut request = ReportRequest::new(ProfilePartition::Personal);
    request.include_all_time = true;
    let snapshot = service.build_report(&user, request).await?;
    println!("=== Tenant A, personal partition ===");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    let admin = Identity::super_admin(UserId::from_uuid(Uuid::parse_str(ADMIN_ID)?));
    let snapshot = service
        .build_report(&admin, ReportRequest::new(ProfilePartition::Personal))
        .await?;
    println!("=== Super-admin, all tenants ===");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

/// Seeds a few months of income and expense rows for both tenants.
async fn seed_sample_rows(store: &MemoryLedgerStore) -> anyhow::Result<()> {
    let tenant_a = TenantId::from_uuid(Uuid::parse_str(TENANT_A_ID)?);
    let tenant_b = TenantId::from_uuid(Uuid::parse_str(TENANT_B_ID)?);
    let today = chrono::Utc::now().date_naive();

    let mut rows = Vec::new();
    for months_back in 0..6u32 {
        let date = today
            .checked_sub_months(chrono::Months::new(months_back))
            .context("sample date out of range")?;

        rows.push(row(tenant_a, ProfilePartition::Personal, RecordKind::Income, Some("Salary"), "3200.00", date)?);
        rows.push(row(tenant_a, ProfilePartition::Personal, RecordKind::Expense, Some("Rent"), "1150.00", date)?);
        rows.push(row(tenant_a, ProfilePartition::Personal, RecordKind::Expense, Some("Vehicle"), "240.35", date)?);
        rows.push(row(tenant_a, ProfilePartition::Personal, RecordKind::Expense, None, "89.90", date)?);
        rows.push(row(tenant_a, ProfilePartition::Business, RecordKind::Income, Some("Invoices"), "8400.00", date)?);
        rows.push(row(tenant_b, ProfilePartition::Personal, RecordKind::Income, Some("Salary"), "2750.00", date)?);
        rows.push(row(tenant_b, ProfilePartition::Personal, RecordKind::Expense, Some("Groceries"), "410.25", date)?);
    }

    store.insert_all(rows).await;
    Ok(())
}

fn row(
    tenant_id: TenantId,
    partition: ProfilePartition,
    kind: RecordKind,
    category: Option<&str>,
    amount: &str,
    occurred_on: NaiveDate,
) -> anyhow::Result<LedgerRecord> {
    Ok(LedgerRecord {
        id: RecordId::new(),
        tenant_id,
        partition,
        kind,
        category: category.map(|name| CategoryRef {
            id: CategoryId::new(),
            name: name.to_string(),
        }),
        amount: Decimal::from_str(amount).context("invalid sample amount")?,
        occurred_on,
    })
}

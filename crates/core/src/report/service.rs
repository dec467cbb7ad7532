//! Report building service.

use std::sync::Arc;

use moneta_shared::Identity;
use moneta_shared::config::ReportingConfig;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::ReportError;
use super::types::{AllTimeTotals, GrandTotals, ReportRequest, ReportSnapshot};
use crate::category::CategoryAggregator;
use crate::ledger::{Clock, LedgerRecord, LedgerRepository, RecordKind};
use crate::period::{Bucket, PeriodBucketizer};
use crate::scope::{Scope, ScopeResolver};
use crate::trend::TrendComposer;

/// Orchestrates one report build end to end.
///
/// The service holds only its collaborators; every build owns its own
/// intermediate state, so concurrent builds need no locking.
pub struct ReportService {
    repo: Arc<dyn LedgerRepository>,
    clock: Arc<dyn Clock>,
    defaults: ReportingConfig,
}

impl ReportService {
    /// Creates a report service over a row provider and a clock.
    #[must_use]
    pub fn new(
        repo: Arc<dyn LedgerRepository>,
        clock: Arc<dyn Clock>,
        defaults: ReportingConfig,
    ) -> Self {
        Self {
            repo,
            clock,
            defaults,
        }
    }

    /// Builds an immutable report snapshot for one caller.
    ///
    /// Pipeline: validate window (fail fast, before any I/O) -> resolve
    /// scope -> fetch income and expense concurrently -> bucketize ->
    /// aggregate categories over the window-filtered records ->
    /// compose the trend -> assemble.
    ///
    /// An `Empty` scope short-circuits to a zero-filled snapshot without
    /// ever calling the repository. A repository failure on either kind
    /// fails the whole build; no partial snapshot is returned.
    pub async fn build_report(
        &self,
        identity: &Identity,
        request: ReportRequest,
    ) -> Result<ReportSnapshot, ReportError> {
        let anchor = request.anchor.unwrap_or_else(|| self.clock.today());
        let months = request
            .window_months
            .unwrap_or(self.defaults.default_window_months);

        let buckets = PeriodBucketizer::window(anchor, months)?;

        let scope = ScopeResolver::resolve(identity, request.partition);
        debug!(user = %identity.user_id, %anchor, months, ?scope, "building report");

        if scope.is_empty() {
            return Self::zero_snapshot(buckets, &request);
        }

        // Independent fetches; join both before any aggregation starts.
        let (incomes, expenses) = tokio::try_join!(
            self.repo.fetch(&scope, RecordKind::Income),
            self.repo.fetch(&scope, RecordKind::Expense),
        )?;
        debug!(
            incomes = incomes.len(),
            expenses = expenses.len(),
            "fetched ledger records"
        );

        let income_totals = PeriodBucketizer::totals(&buckets, &incomes);
        let expense_totals = PeriodBucketizer::totals(&buckets, &expenses);

        // Category totals reflect the same window but are not
        // bucket-indexed, so they are filtered from the full fetch.
        let windowed_incomes = Self::window_filter(&buckets, &incomes);
        let windowed_expenses = Self::window_filter(&buckets, &expenses);
        let income_categories =
            CategoryAggregator::aggregate(&windowed_incomes, RecordKind::Income);
        let expense_categories =
            CategoryAggregator::aggregate(&windowed_expenses, RecordKind::Expense);

        let trend =
            TrendComposer::compose(&income_totals, &expense_totals, request.starting_balance)?;

        let window_income: Decimal = income_totals.iter().sum();
        let window_expense: Decimal = expense_totals.iter().sum();
        let all_time = request
            .include_all_time
            .then(|| Self::all_time_totals(&incomes, &expenses));

        Ok(ReportSnapshot {
            cumulative_display: trend.cumulative_display(),
            per_bucket: trend.per_bucket,
            cumulative: trend.cumulative,
            income_categories,
            expense_categories,
            grand_totals: GrandTotals {
                income: window_income,
                expense: window_expense,
                net: window_income - window_expense,
                all_time,
            },
            window: buckets,
        })
    }

    /// The valid "you have no data" snapshot: full bucket window, all
    /// totals zero. Distinct from any error path by construction.
    fn zero_snapshot(
        buckets: Vec<Bucket>,
        request: &ReportRequest,
    ) -> Result<ReportSnapshot, ReportError> {
        let zeros = vec![Decimal::ZERO; buckets.len()];
        let trend = TrendComposer::compose(&zeros, &zeros, request.starting_balance)?;

        Ok(ReportSnapshot {
            cumulative_display: trend.cumulative_display(),
            per_bucket: trend.per_bucket,
            cumulative: trend.cumulative,
            income_categories: Vec::new(),
            expense_categories: Vec::new(),
            grand_totals: GrandTotals {
                income: Decimal::ZERO,
                expense: Decimal::ZERO,
                net: Decimal::ZERO,
                all_time: request.include_all_time.then(|| AllTimeTotals {
                    income: Decimal::ZERO,
                    expense: Decimal::ZERO,
                    net: Decimal::ZERO,
                }),
            },
            window: buckets,
        })
    }

    /// Clones the records dated within the window span.
    fn window_filter(buckets: &[Bucket], records: &[LedgerRecord]) -> Vec<LedgerRecord> {
        let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
            return Vec::new();
        };

        records
            .iter()
            .filter(|r| r.occurred_on >= first.start && r.occurred_on < last.end)
            .cloned()
            .collect()
    }

    fn all_time_totals(incomes: &[LedgerRecord], expenses: &[LedgerRecord]) -> AllTimeTotals {
        let income: Decimal = incomes.iter().map(|r| r.amount).sum();
        let expense: Decimal = expenses.iter().map(|r| r.amount).sum();
        AllTimeTotals {
            income,
            expense,
            net: income - expense,
        }
    }
}

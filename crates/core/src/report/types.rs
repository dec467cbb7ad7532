//! Report request and snapshot types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::CategoryTotal;
use crate::period::Bucket;
use crate::scope::ProfilePartition;
use crate::trend::BucketFlow;

/// Parameters of one report build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Which partition of the caller's tenant to report on.
    pub partition: ProfilePartition,
    /// Anchor date; the window ends at the month containing it.
    /// Defaults to the clock's today.
    pub anchor: Option<NaiveDate>,
    /// Window size in months. Defaults to the configured value.
    pub window_months: Option<u32>,
    /// Opening balance the cumulative series starts from.
    #[serde(default)]
    pub starting_balance: Decimal,
    /// Whether to also compute totals over every fetched record,
    /// including ones outside the display window.
    #[serde(default)]
    pub include_all_time: bool,
}

impl ReportRequest {
    /// A request with defaults for everything but the partition.
    #[must_use]
    pub const fn new(partition: ProfilePartition) -> Self {
        Self {
            partition,
            anchor: None,
            window_months: None,
            starting_balance: Decimal::ZERO,
            include_all_time: false,
        }
    }
}

/// Totals over the full fetched record set, ignoring the display window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllTimeTotals {
    /// All-time income.
    pub income: Decimal,
    /// All-time expense.
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
}

/// Window-level totals of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrandTotals {
    /// Income within the window.
    pub income: Decimal,
    /// Expense within the window.
    pub expense: Decimal,
    /// `income - expense` within the window.
    pub net: Decimal,
    /// All-time totals, present only when the caller asked for them.
    pub all_time: Option<AllTimeTotals>,
}

/// Immutable result of one report build.
///
/// Plain serializable data with no behavior, suitable for direct
/// rendering or JSON transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// The calendar-month window, ascending.
    pub window: Vec<Bucket>,
    /// Income/expense/balance per bucket, index-aligned with `window`.
    pub per_bucket: Vec<BucketFlow>,
    /// Window-filtered income category rollup.
    pub income_categories: Vec<CategoryTotal>,
    /// Window-filtered expense category rollup.
    pub expense_categories: Vec<CategoryTotal>,
    /// Running cumulative balance, unclamped.
    pub cumulative: Vec<Decimal>,
    /// Cumulative series floored at zero for display.
    pub cumulative_display: Vec<Decimal>,
    /// Window (and optionally all-time) totals.
    pub grand_totals: GrandTotals,
}

//! Trend series types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income, expense, and net balance of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketFlow {
    /// Income total of the bucket.
    pub income: Decimal,
    /// Expense total of the bucket.
    pub expense: Decimal,
    /// `income - expense`.
    pub balance: Decimal,
}

/// Composed trend over a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Per-bucket flows, index-aligned with the window.
    pub per_bucket: Vec<BucketFlow>,
    /// Running cumulative balance (projected patrimony), unclamped.
    ///
    /// This is the accumulator truth: a deficit month drives it negative
    /// and the next bucket continues from the negative value.
    pub cumulative: Vec<Decimal>,
}

impl TrendSeries {
    /// The cumulative series floored at zero, for display.
    ///
    /// Clamping happens here at presentation time only; the accumulator
    /// state in [`TrendSeries::cumulative`] stays unclamped so later
    /// buckets are never corrupted.
    #[must_use]
    pub fn cumulative_display(&self) -> Vec<Decimal> {
        self.cumulative
            .iter()
            .map(|value| (*value).max(Decimal::ZERO))
            .collect()
    }
}

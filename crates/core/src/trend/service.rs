//! Trend composition service.

use rust_decimal::Decimal;

use super::error::TrendError;
use super::types::{BucketFlow, TrendSeries};

/// Combines bucketized income and expense totals into a balance trend.
pub struct TrendComposer;

impl TrendComposer {
    /// Composes per-bucket flows and the running cumulative series.
    ///
    /// `balance[i] = income[i] - expense[i]`;
    /// `cumulative[0] = starting_balance + balance[0]` and each later
    /// entry continues from its unclamped predecessor. No clock, no
    /// randomness: identical inputs give identical output.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::LengthMismatch`] when the two series cover
    /// different bucket counts.
    pub fn compose(
        income: &[Decimal],
        expense: &[Decimal],
        starting_balance: Decimal,
    ) -> Result<TrendSeries, TrendError> {
        if income.len() != expense.len() {
            return Err(TrendError::LengthMismatch {
                income: income.len(),
                expense: expense.len(),
            });
        }

        let mut per_bucket = Vec::with_capacity(income.len());
        let mut cumulative = Vec::with_capacity(income.len());
        let mut running = starting_balance;

        for (income_total, expense_total) in income.iter().zip(expense) {
            let balance = income_total - expense_total;
            running += balance;

            per_bucket.push(BucketFlow {
                income: *income_total,
                expense: *expense_total,
                balance,
            });
            cumulative.push(running);
        }

        Ok(TrendSeries {
            per_bucket,
            cumulative,
        })
    }
}

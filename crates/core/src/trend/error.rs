//! Trend composition error types.

use thiserror::Error;

/// Errors raised while composing a trend series.
#[derive(Debug, Clone, Error)]
pub enum TrendError {
    /// Income and expense series cover different numbers of buckets.
    #[error("Mismatched series lengths: {income} income buckets vs {expense} expense buckets")]
    LengthMismatch {
        /// Number of income buckets.
        income: usize,
        /// Number of expense buckets.
        expense: usize,
    },
}

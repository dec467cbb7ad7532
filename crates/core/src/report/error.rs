//! Report error types.

use thiserror::Error;

use crate::ledger::RepositoryError;
use crate::period::WindowError;
use crate::trend::TrendError;

/// Errors that can fail a report build.
///
/// "You have no data" is never represented here: an empty scope or an
/// empty ledger yields a valid zero-filled snapshot. An error always
/// means "we could not determine your data".
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested window is invalid; rejected before any fetch.
    #[error("Invalid report window: {0}")]
    InvalidWindow(#[from] WindowError),

    /// The row store failed for either record kind. The whole report
    /// fails; a snapshot with one side zeroed would be a lie.
    #[error("Report fetch failed: {0}")]
    Repository(#[from] RepositoryError),

    /// Trend composition failed.
    #[error("Report composition failed: {0}")]
    Trend(#[from] TrendError),
}

//! Repository error types.

use thiserror::Error;

/// Errors a row-access provider may surface.
///
/// Any of these fails the whole report build; a partial snapshot would
/// misrepresent the caller's finances.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("Ledger store unavailable: {0}")]
    Unavailable(String),

    /// The backing store did not answer in time.
    #[error("Ledger store timed out after {0} ms")]
    Timeout(u64),

    /// The backing store answered with an error.
    #[error("Ledger store error: {0}")]
    Backend(String),
}

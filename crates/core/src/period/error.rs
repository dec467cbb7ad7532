//! Window construction error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while constructing a reporting window.
#[derive(Debug, Clone, Error)]
pub enum WindowError {
    /// The requested window spans zero months.
    #[error("Window must span at least one month")]
    Empty,

    /// The window would step outside the representable calendar range.
    #[error("Window of {months} months anchored at {anchor} is out of calendar range")]
    OutOfRange {
        /// Requested anchor date.
        anchor: NaiveDate,
        /// Requested window size.
        months: u32,
    },
}

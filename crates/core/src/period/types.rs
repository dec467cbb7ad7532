//! Period bucket types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar-month slot in a reporting window.
///
/// Membership is half-open on `[start, end)`: `end` is the first day of
/// the following month, so the last day of a month always belongs to
/// that month and never leaks into the next bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Period label in `YYYY-MM` form.
    pub label: String,
    /// First day of the month (inclusive).
    pub start: NaiveDate,
    /// First day of the following month (exclusive).
    pub end: NaiveDate,
}

impl Bucket {
    /// Returns true if the given date falls within this bucket.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

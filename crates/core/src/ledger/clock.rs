//! Clock seam for anchor-date defaulting.
//!
//! The only place the engine would otherwise touch wall-clock time is
//! when a caller omits the anchor date. Injecting the clock keeps every
//! report build reproducible under test.

use chrono::NaiveDate;

/// Supplies "today" to the engine.
pub trait Clock: Send + Sync {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// The production clock, backed by UTC wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

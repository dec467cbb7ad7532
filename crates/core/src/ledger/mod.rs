//! Ledger records and the row-access contract.
//!
//! The engine never owns storage. It consumes a [`LedgerRepository`]
//! (any persistent store can satisfy it) and a [`Clock`], and treats
//! every fetched row as immutable.

pub mod clock;
pub mod error;
pub mod repository;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::RepositoryError;
pub use repository::LedgerRepository;
pub use types::{CategoryRef, LedgerRecord, RecordKind};

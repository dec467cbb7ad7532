//! Report building facade.
//!
//! One `build_report` call owns its whole pipeline: resolve scope,
//! fetch rows, bucketize, aggregate, compose, assemble. Nothing is
//! shared between concurrent builds and nothing is cached; the snapshot
//! is created fresh per request and discarded after delivery.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{AllTimeTotals, GrandTotals, ReportRequest, ReportSnapshot};

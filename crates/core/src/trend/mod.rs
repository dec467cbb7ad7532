//! Per-bucket balance and cumulative patrimony series.

pub mod error;
pub mod service;
pub mod types;

pub use error::TrendError;
pub use service::TrendComposer;
pub use types::{BucketFlow, TrendSeries};

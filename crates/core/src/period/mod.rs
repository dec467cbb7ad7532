//! Calendar-month bucketing of dated records.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::WindowError;
pub use service::PeriodBucketizer;
pub use types::Bucket;

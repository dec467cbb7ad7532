//! Per-category rollups with deterministic ordering and colors.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::CategoryAggregator;
pub use types::{CategoryTotal, UNCATEGORIZED};

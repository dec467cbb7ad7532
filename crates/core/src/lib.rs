//! Reporting and aggregation engine for Moneta.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! It turns raw dated monetary records into period-based financial summaries,
//! scoped per tenant and per profile partition.
//!
//! # Modules
//!
//! - `scope` - Tenant/partition visibility resolution
//! - `ledger` - Record types and the row-access repository contract
//! - `period` - Calendar-month bucketing of dated records
//! - `category` - Per-category rollups with deterministic ordering
//! - `trend` - Per-bucket balance and cumulative patrimony series
//! - `report` - The facade that orchestrates one report build

pub mod category;
pub mod ledger;
pub mod period;
pub mod report;
pub mod scope;
pub mod trend;

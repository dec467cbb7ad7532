//! Shared types, errors, and configuration for Moneta.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - The caller identity established by the external auth layer
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::Identity;
pub use config::AppConfig;
pub use error::{AppError, AppResult};

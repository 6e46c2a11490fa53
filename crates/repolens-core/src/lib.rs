//! Repolens Core
//!
//! Core domain types, traits, and error handling for repolens.
//! This crate has minimal dependencies and defines the shared vocabulary
//! used across all other crates: queries, result sets, the pagination
//! engine, the cache gateway, and the repository query service.

pub mod cache;
pub mod error;
pub mod page;
pub mod ports;
pub mod query;
pub mod repo;
pub mod service;

pub use error::{Error, Result};
pub use query::Query;
pub use repo::{RepoRecord, ResultSet};

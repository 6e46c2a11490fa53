//! GitHub repository-search adapter.
//!
//! Implements the core [`RepositorySearch`](repolens_core::ports::RepositorySearch)
//! port against the GitHub REST search API.

pub mod client;
pub mod types;

pub use client::{GitHubSearch, GitHubSearchConfig};

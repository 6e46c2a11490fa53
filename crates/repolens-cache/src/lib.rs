//! Cache store backends for repolens.
//!
//! Implementations of the core [`CacheStore`](repolens_core::ports::CacheStore)
//! port: an in-memory store for single-process deployments and a
//! filesystem store that survives restarts. Expiry is lazy in both;
//! an expired entry reads as a miss.

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStore;
pub use keys::sanitize_key;
pub use memory::MemoryStore;

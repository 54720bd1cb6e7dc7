//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`.
//! This crate contains the JSON-file store (the system of record) and the
//! in-memory fallback used when no data directory is usable.

pub mod storage;

// Re-exports - JSON files
pub use storage::{JsonFileTweetRepository, JsonFileUserRepository, JsonStore, StorageConfig};

// Re-exports - In-Memory
pub use storage::{InMemoryTweetRepository, InMemoryUserRepository};

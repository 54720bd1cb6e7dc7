//! Application state - shared across all handlers.

use std::sync::Arc;

use chirp_core::ports::{TweetRepository, UserRepository};
use chirp_infra::storage::{
    InMemoryTweetRepository, InMemoryUserRepository, JsonStore, StorageConfig,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub tweets: Arc<dyn TweetRepository>,
}

impl AppState {
    /// Build the application state over the configured JSON store.
    pub async fn new(storage: &StorageConfig) -> Self {
        match JsonStore::init(storage).await {
            Ok(store) => Self {
                users: store.users,
                tweets: store.tweets,
            },
            Err(e) => {
                tracing::error!(
                    "Failed to open JSON store: {}. Using in-memory fallback; data will not survive a restart.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    /// State backed by in-memory collections only.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            tweets: Arc::new(InMemoryTweetRepository::new()),
        }
    }
}

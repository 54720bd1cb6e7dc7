//! Storage implementations - JSON files on disk and an in-memory fallback.

mod json_file;
mod memory;
mod store;

pub use json_file::{JsonFileRepository, JsonFileTweetRepository, JsonFileUserRepository};
pub use memory::{InMemoryRepository, InMemoryTweetRepository, InMemoryUserRepository};
pub use store::{JsonStore, StorageConfig};

use uuid::Uuid;

use chirp_core::domain::{Tweet, UserRecord};

/// Identity of a stored entity within its collection.
pub trait StoredEntity: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

impl StoredEntity for UserRecord {
    fn id(&self) -> Uuid {
        self.profile.user_id
    }
}

impl StoredEntity for Tweet {
    fn id(&self) -> Uuid {
        self.tweet_id
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::User;

/// Tweet entity. The author is a denormalized snapshot taken at creation
/// time and is not kept in sync with later user edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub tweet_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author: User,
}

impl Tweet {
    /// Create a new tweet with a generated ID and server-assigned timestamp.
    pub fn new(content: String, author: User) -> Self {
        Self {
            tweet_id: Uuid::new_v4(),
            content,
            created_at: Utc::now(),
            updated_at: None,
            author,
        }
    }
}

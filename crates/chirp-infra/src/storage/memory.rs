//! In-memory repository implementation - used as fallback when no data
//! directory is usable, and as the storage double in handler tests.
//!
//! Note: Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use chirp_core::domain::{Tweet, UserRecord};
use chirp_core::error::RepoError;
use chirp_core::ports::{BaseRepository, TweetRepository, UserRepository};

use super::StoredEntity;

/// In-memory repository over an insertion-ordered `Vec` behind an async
/// RwLock. Mirrors the merge/ordering semantics of the JSON-file store.
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> BaseRepository<T, Uuid> for InMemoryRepository<T>
where
    T: StoredEntity + 'static,
{
    async fn list(&self) -> Result<Vec<T>, RepoError> {
        let items = self.items.read().await;
        Ok(items.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut items = self.items.write().await;

        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => items.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut items = self.items.write().await;

        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryRepository<UserRecord>;

/// In-memory tweet repository.
pub type InMemoryTweetRepository = InMemoryRepository<Tweet>;

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, RepoError> {
        let records = self.items.read().await;

        Ok(records
            .iter()
            .find(|r| r.profile.email == email && r.password == password)
            .cloned())
    }
}

#[async_trait]
impl TweetRepository for InMemoryTweetRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_core::domain::User;

    fn author() -> User {
        User {
            user_id: Uuid::new_v4(),
            email: "author@example.com".to_string(),
            first_name: "Author".to_string(),
            last_name: "Person".to_string(),
            birthday: None,
        }
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryTweetRepository::new();
        let tweet = repo
            .save(Tweet::new("hello".to_string(), author()))
            .await
            .unwrap();

        let found = repo.find_by_id(tweet.tweet_id).await.unwrap().unwrap();
        assert_eq!(found.content, "hello");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryTweetRepository::new();
        assert!(matches!(
            repo.delete(Uuid::new_v4()).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = InMemoryTweetRepository::new();
        for content in ["one", "two", "three"] {
            repo.save(Tweet::new(content.to_string(), author()))
                .await
                .unwrap();
        }

        let contents: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.content)
            .collect();
        assert_eq!(contents, vec!["one", "two", "three"]);
    }
}

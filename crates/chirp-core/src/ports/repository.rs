use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Tweet, UserRecord};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations over a single
/// ordered collection.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Return the whole collection in insertion order.
    async fn list(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update). An existing entity is replaced
    /// in place, keeping its position in the collection.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<UserRecord, Uuid> {
    /// Find the first user matching both email and password exactly.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, RepoError>;
}

/// Tweet repository.
#[async_trait]
pub trait TweetRepository: BaseRepository<Tweet, Uuid> {}

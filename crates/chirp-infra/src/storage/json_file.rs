//! JSON-file repositories - one collection per file, rewritten wholesale.
//!
//! Every operation takes the collection lock, reads the whole JSON array,
//! scans it linearly, and on mutation rewrites the whole file. The rewrite
//! itself is not atomic: a crash mid-write can truncate the file, and the
//! lock does not protect against a second process sharing the same files.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use uuid::Uuid;

use chirp_core::domain::{Tweet, UserRecord};
use chirp_core::error::RepoError;
use chirp_core::ports::{BaseRepository, TweetRepository, UserRepository};

use super::StoredEntity;

/// Generic JSON-file repository implementation.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    // Serializes read-modify-rewrite cycles within this process.
    lock: Mutex<()>,
    _entity: PhantomData<T>,
}

impl<T> JsonFileRepository<T>
where
    T: StoredEntity + Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    /// Read the whole collection. A missing file is an empty collection;
    /// the file is only created on first write.
    async fn load(&self) -> Result<Vec<T>, RepoError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepoError::Io(e.to_string())),
        };

        serde_json::from_str(&raw).map_err(|e| RepoError::Corrupt(e.to_string()))
    }

    /// Rewrite the whole collection file.
    async fn persist(&self, items: &[T]) -> Result<(), RepoError> {
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| RepoError::Corrupt(e.to_string()))?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| RepoError::Io(e.to_string()))
    }
}

#[async_trait]
impl<T> BaseRepository<T, Uuid> for JsonFileRepository<T>
where
    T: StoredEntity + Serialize + DeserializeOwned + 'static,
{
    async fn list(&self) -> Result<Vec<T>, RepoError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let _guard = self.lock.lock().await;
        let items = self.load().await?;
        Ok(items.into_iter().find(|item| item.id() == id))
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;

        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => items.push(entity.clone()),
        }

        self.persist(&items).await?;
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;

        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Err(RepoError::NotFound);
        }

        self.persist(&items).await
    }
}

/// JSON-file user repository.
pub type JsonFileUserRepository = JsonFileRepository<UserRecord>;

/// JSON-file tweet repository.
pub type JsonFileTweetRepository = JsonFileRepository<Tweet>;

#[async_trait]
impl UserRepository for JsonFileUserRepository {
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, RepoError> {
        let _guard = self.lock.lock().await;
        let records = self.load().await?;

        Ok(records
            .into_iter()
            .find(|r| r.profile.email == email && r.password == password))
    }
}

#[async_trait]
impl TweetRepository for JsonFileTweetRepository {}

use std::path::PathBuf;
use std::sync::Arc;

use chirp_core::error::RepoError;

use super::{JsonFileTweetRepository, JsonFileUserRepository};

/// Configuration for the JSON-file store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding the collection files. Created if missing.
    pub data_dir: PathBuf,
    pub users_file: String,
    pub tweets_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            users_file: "users.json".to_string(),
            tweets_file: "tweets.json".to_string(),
        }
    }
}

/// The two file-backed collections the API persists into.
pub struct JsonStore {
    pub users: Arc<JsonFileUserRepository>,
    pub tweets: Arc<JsonFileTweetRepository>,
}

impl JsonStore {
    /// Open the store, creating the data directory if needed.
    pub async fn init(config: &StorageConfig) -> Result<Self, RepoError> {
        tokio::fs::create_dir_all(&config.data_dir)
            .await
            .map_err(|e| RepoError::Io(e.to_string()))?;

        let users_path = config.data_dir.join(&config.users_file);
        let tweets_path = config.data_dir.join(&config.tweets_file);

        tracing::info!(
            users = %users_path.display(),
            tweets = %tweets_path.display(),
            "JSON store opened"
        );

        Ok(Self {
            users: Arc::new(JsonFileUserRepository::new(users_path)),
            tweets: Arc::new(JsonFileTweetRepository::new(tweets_path)),
        })
    }
}

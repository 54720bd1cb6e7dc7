//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use chirp_infra::storage::StorageConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = StorageConfig::default();
        let storage = StorageConfig {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            users_file: env::var("USERS_FILE").unwrap_or(defaults.users_file),
            tweets_file: env::var("TWEETS_FILE").unwrap_or(defaults.tweets_file),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage,
        }
    }
}

// src/tasks/storage/mod.rs

//! The three storage backends and the config-driven factory that selects
//! and wires one of them at startup.

pub mod prefs;
pub mod remote;
pub mod sqlite;

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;
use crate::tasks::error::StorageError;
use crate::tasks::traits::TaskStorage;

pub use prefs::PrefsTaskStore;
pub use remote::RemoteTaskStore;
pub use sqlite::SqliteTaskStore;

/// Which backend a manager talks to. Selected once at construction; there
/// is no switching or mirroring between backends at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Prefs,
    Sqlite,
    Remote,
}

impl FromStr for StorageKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefs" => Ok(StorageKind::Prefs),
            "sqlite" => Ok(StorageKind::Sqlite),
            "remote" => Ok(StorageKind::Remote),
            other => Err(StorageError::Configuration(format!(
                "Unknown storage backend '{}' (expected prefs, sqlite or remote)",
                other
            ))),
        }
    }
}

/// Builds the backend named by the config and wires up its medium. For the
/// embedded database this creates the file and runs migrations; the other
/// two defer all I/O to their first call.
pub async fn connect(config: &Config) -> Result<Arc<dyn TaskStorage>, StorageError> {
    let kind: StorageKind = config.storage_backend.parse()?;

    match kind {
        StorageKind::Prefs => {
            info!("Using preferences store at {}", config.prefs_path);
            Ok(Arc::new(PrefsTaskStore::new(
                &config.prefs_path,
                &config.prefs_slot,
            )))
        }
        StorageKind::Sqlite => {
            info!("Using embedded database at {}", config.database_url);
            let options = SqliteConnectOptions::from_str(&config.database_url)?
                .create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.sqlite_max_connections as u32)
                .connect_with(options)
                .await?;
            sqlite::migration::run_migrations(&pool).await?;
            Ok(Arc::new(SqliteTaskStore::new(pool)))
        }
        StorageKind::Remote => {
            info!(
                "Using remote todos service at {} (user {})",
                config.remote_base_url, config.remote_user_id
            );
            let store = RemoteTaskStore::new(
                &config.remote_base_url,
                config.remote_user_id,
                config.remote_timeout(),
            )?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_kind_parses_known_names() {
        assert_eq!("prefs".parse::<StorageKind>().unwrap(), StorageKind::Prefs);
        assert_eq!(
            "sqlite".parse::<StorageKind>().unwrap(),
            StorageKind::Sqlite
        );
        assert_eq!(
            "remote".parse::<StorageKind>().unwrap(),
            StorageKind::Remote
        );
    }

    #[test]
    fn storage_kind_rejects_unknown_names() {
        let err = "realm".parse::<StorageKind>().unwrap_err();
        assert!(matches!(err, StorageError::Configuration(_)));
    }
}

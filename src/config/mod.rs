// src/config/mod.rs

//! Environment-driven configuration, loaded once at startup. Every knob has
//! a default, so a bare environment gets a working preferences-file setup.

use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct Config {
    // ── Storage Selection
    pub storage_backend: String,

    // ── Preferences Store
    pub prefs_path: String,
    pub prefs_slot: String,

    // ── Embedded Database
    pub database_url: String,
    pub sqlite_max_connections: usize,

    // ── Remote Todos Service
    pub remote_base_url: String,
    pub remote_user_id: i64,
    pub remote_timeout_secs: u64,

    // ── Logging Configuration
    pub log_level: String,
}

// Values may carry inline comments when they come from a .env file; strip
// them before parsing and fall back to the default on a parse failure.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Self {
        // Optional .env file; real environment variables take precedence.
        let _ = dotenvy::dotenv();

        Self {
            storage_backend: env_var_or("TASKDECK_STORAGE", "prefs".to_string()),
            prefs_path: env_var_or("TASKDECK_PREFS_PATH", "./taskdeck.prefs.json".to_string()),
            prefs_slot: env_var_or("TASKDECK_PREFS_SLOT", "tasks".to_string()),
            database_url: env_var_or("DATABASE_URL", "sqlite:./taskdeck.db".to_string()),
            sqlite_max_connections: env_var_or("TASKDECK_SQLITE_MAX_CONNECTIONS", 5),
            remote_base_url: env_var_or(
                "TASKDECK_REMOTE_BASE_URL",
                "https://dummyjson.com/todos".to_string(),
            ),
            remote_user_id: env_var_or("TASKDECK_REMOTE_USER_ID", 1),
            remote_timeout_secs: env_var_or("TASKDECK_REMOTE_TIMEOUT", 30),
            log_level: env_var_or("TASKDECK_LOG_LEVEL", "info".to_string()),
        }
    }

    // --- Convenience Methods for Common Operations ---

    /// Request timeout for the remote todos service.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }

    /// Check if debug logging is enabled.
    pub fn is_debug(&self) -> bool {
        self.log_level.to_lowercase() == "debug"
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env();

        assert_eq!(config.prefs_slot, "tasks");
        assert_eq!(config.remote_base_url, "https://dummyjson.com/todos");
        assert_eq!(config.remote_user_id, 1);
    }

    #[test]
    fn test_env_var_or_uses_default_for_missing_key() {
        let parsed: usize = env_var_or("TASKDECK_TEST_KEY_THAT_IS_NEVER_SET", 7);
        assert_eq!(parsed, 7);
    }

    #[test]
    fn test_convenience_methods() {
        let config = Config::from_env();

        assert_eq!(config.remote_timeout(), Duration::from_secs(30));
        assert!(!config.is_debug());
    }
}

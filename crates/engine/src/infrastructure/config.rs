//! Engine configuration from environment variables.

use std::path::PathBuf;

const DEFAULT_APP_NAME: &str = "magic-movers";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "data";

/// Runtime configuration for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub app_name: String,
    pub server_host: String,
    pub server_port: u16,
    pub data_dir: PathBuf,
    /// `*` or a comma separated origin list. `None` disables CORS.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let server_port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid SERVER_PORT, using {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.server_port,
        };

        Self {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            data_dir: get("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }
}

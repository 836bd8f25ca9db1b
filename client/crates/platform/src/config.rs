//! Client Configuration
//!
//! Where the backend lives, where the persisted token is kept, and how this
//! device introduces itself.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default backend base URL (auth, registration and resource endpoints)
pub const DEFAULT_API_BASE_URL: &str = "https://gestion.ajmariduena.com/api/v1";

/// Storage key under which the bearer token is persisted
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "@bearerToken";

pub const ENV_API_URL: &str = "LAPINTA_API_URL";
pub const ENV_STORAGE_PATH: &str = "LAPINTA_STORAGE_PATH";
pub const ENV_DEVICE_NAME: &str = "LAPINTA_DEVICE_NAME";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// JSON file backing the persisted key-value store
    pub storage_path: PathBuf,
    /// Overrides the detected device name
    pub device_name: Option<String>,
    /// Key holding the bearer token inside the store
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_path: default_storage_path(),
            device_name: None,
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_base_url: non_blank(ENV_API_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            storage_path: non_blank(ENV_STORAGE_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
            device_name: non_blank(ENV_DEVICE_NAME),
            token_storage_key: defaults.token_storage_key,
        }
    }

    /// Config for local development against a backend on localhost
    pub fn development() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/api/v1".to_string(),
            ..Default::default()
        }
    }
}

fn default_storage_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("lapinta")
        .join("storage.json")
}

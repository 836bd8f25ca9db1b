//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::config::{ClientConfig, DEFAULT_TOKEN_STORAGE_KEY};
use platform::device::DeviceInfo;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Storage key holding the persisted bearer token
    pub token_storage_key: String,
    /// Sent as `device_name` when a token is issued
    pub device: DeviceInfo,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            device: DeviceInfo::default(),
        }
    }
}

impl AuthConfig {
    /// Derive from the client configuration, detecting the device name
    pub fn from_client_config(config: &ClientConfig) -> Self {
        Self {
            token_storage_key: config.token_storage_key.clone(),
            device: DeviceInfo::detect(config.device_name.as_deref()),
        }
    }

    /// Create config for development (fixed device name)
    pub fn development() -> Self {
        Self {
            device: DeviceInfo::from_sources(Some("lapinta-dev"), None),
            ..Default::default()
        }
    }

    pub fn device_name(&self) -> &str {
        self.device.name()
    }
}

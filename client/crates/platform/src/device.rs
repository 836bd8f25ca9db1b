//! Device identification
//!
//! The credential exchange endpoint names every issued token after the
//! device that requested it (`device_name`).

/// Fallback when neither the configuration nor the environment name the host
pub const DEFAULT_DEVICE_NAME: &str = "lapinta-cli";

/// Identifier sent as `device_name` with sign-in and registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    name: String,
}

impl DeviceInfo {
    /// Resolve from the configured override and the process environment
    pub fn detect(configured: Option<&str>) -> Self {
        let hostname = std::env::var("HOSTNAME")
            .ok()
            .or_else(|| std::env::var("COMPUTERNAME").ok());
        Self::from_sources(configured, hostname.as_deref())
    }

    /// Pick the first non-blank source: override, then hostname, then the default
    pub fn from_sources(configured: Option<&str>, hostname: Option<&str>) -> Self {
        let name = [configured, hostname]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_DEVICE_NAME);

        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_DEVICE_NAME.to_string(),
        }
    }
}

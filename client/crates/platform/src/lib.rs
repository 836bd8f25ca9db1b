//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations for the client:
//! - Client configuration (environment + defaults)
//! - HTTP client with a process-wide bearer credential slot
//! - Persisted key-value storage (token survives restarts)
//! - Device identification sent with credential exchanges
//! - Zeroizing secret strings for passwords and tokens

pub mod config;
pub mod credential;
pub mod device;
pub mod http;
pub mod secret;
pub mod storage;

pub use config::ClientConfig;
pub use credential::{BearerToken, Credential};
pub use device::DeviceInfo;
pub use http::{ApiClient, HttpError, HttpResult, ValidationErrors};
pub use secret::SecretString;
pub use storage::{
    FileKeyValueStore, KeyValueStore, LocalKeyValueStore, MemoryKeyValueStore, StorageError,
    StorageResult,
};

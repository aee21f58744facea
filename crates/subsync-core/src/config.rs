//! Credentials configuration for the zone API
//!
//! Credentials are loaded from a local JSON file (the same shape the OVH
//! console hands out): endpoint name plus application key, application
//! secret, and consumer key. The file path comes from the command line or
//! the `SUBSYNC_CREDENTIALS` environment variable.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default credentials file path when neither flag nor env var is set
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials.json";

/// Environment variable overriding the credentials file path
pub const CREDENTIALS_PATH_ENV: &str = "SUBSYNC_CREDENTIALS";

/// Zone API credentials
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// API endpoint name (e.g. "ovh-eu")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Application key
    pub app_key: String,

    /// Application secret
    pub app_secret: String,

    /// Consumer key
    pub consumer_key: String,
}

fn default_endpoint() -> String {
    "ovh-eu".to_string()
}

// Secrets never appear in Debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("app_key", &self.app_key)
            .field("app_secret", &"<REDACTED>")
            .field("consumer_key", &"<REDACTED>")
            .finish()
    }
}

impl Credentials {
    /// Load credentials from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "cannot read credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        let credentials: Self = serde_json::from_str(&data).map_err(|e| {
            Error::config(format!(
                "invalid credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        credentials.validate()?;
        Ok(credentials)
    }

    /// Validate that no key is empty
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::config("endpoint cannot be empty"));
        }
        if self.app_key.trim().is_empty() {
            return Err(Error::config("appKey cannot be empty"));
        }
        if self.app_secret.trim().is_empty() {
            return Err(Error::config("appSecret cannot be empty"));
        }
        if self.consumer_key.trim().is_empty() {
            return Err(Error::config("consumerKey cannot be empty"));
        }
        Ok(())
    }
}

//! Service-account settings loading.
//!
//! Credentials come from `prismasase_settings.json` in the working
//! directory, with per-field environment variable overrides so automation
//! can avoid writing secrets to disk.

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;

/// Settings file looked up in the current working directory.
pub const SETTINGS_FILE: &str = "prismasase_settings.json";

pub const ENV_CLIENT_ID: &str = "PRISMASASE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "PRISMASASE_CLIENT_SECRET";
pub const ENV_TSG_ID: &str = "PRISMASASE_TSG_ID";

/// Service-account credentials for client-credential login.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub tsg_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct PartialSettings {
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    tsg_id: Option<String>,
}

impl AuthSettings {
    /// Load settings from the default file location plus the environment.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from `path` (when it exists), then apply environment
    /// overrides. Every field must end up populated.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let mut partial = PartialSettings::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            partial = serde_json::from_str(&content).map_err(|e| {
                CoreError::Settings(format!("invalid settings file {}: {}", path.display(), e))
            })?;
        }

        if let Ok(value) = env::var(ENV_CLIENT_ID) {
            partial.client_id = Some(value);
        }
        if let Ok(value) = env::var(ENV_CLIENT_SECRET) {
            partial.client_secret = Some(value);
        }
        if let Ok(value) = env::var(ENV_TSG_ID) {
            partial.tsg_id = Some(value);
        }

        let require = |field: Option<String>, name: &str| {
            field.filter(|v| !v.is_empty()).ok_or_else(|| {
                CoreError::Settings(format!(
                    "missing {}: set it in {} or the environment",
                    name, SETTINGS_FILE
                ))
            })
        };

        Ok(Self {
            client_id: require(partial.client_id, "client_id")?,
            client_secret: require(partial.client_secret, "client_secret")?,
            tsg_id: require(partial.tsg_id, "tsg_id")?,
        })
    }
}

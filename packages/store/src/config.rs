//! # Client configuration: `mavecode.toml`
//!
//! Where the client finds its backend and which optional integrations are
//! switched on. The web build has no process environment at runtime, so the
//! only overrides are baked in at compile time through `option_env!`.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.mavecode.my.id/api"
//!
//! [auth]
//! google_client_id = "1234.apps.googleusercontent.com"
//!
//! [content]
//! realtime = true     # follow the document feed when one is connected
//! ```
//!
//! ## Environment overrides (compile time)
//!
//! | Variable | Field |
//! |----------|-------|
//! | `MAVECODE_API_URL` | `api.base_url` |
//! | `MAVECODE_GOOGLE_CLIENT_ID` | `auth.google_client_id` |
//!
//! All structs derive `Default` so that a missing or empty file is equivalent
//! to the production defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.mavecode.my.id/api";

/// Top-level configuration stored in `mavecode.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// REST base path, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth client id for Google sign-in. `None` hides the Google button.
    #[serde(default)]
    pub google_client_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_realtime")]
    pub realtime: bool,
}

fn default_realtime() -> bool {
    true
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            realtime: default_realtime(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mavecode.toml"
    }

    /// Defaults overlaid with compile-time environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply the compile-time environment overrides on top of `self`.
    pub fn with_env(self) -> Self {
        self.with_overrides(
            option_env!("MAVECODE_API_URL"),
            option_env!("MAVECODE_GOOGLE_CLIENT_ID"),
        )
    }

    /// Builder method applying non-empty overrides.
    pub fn with_overrides(mut self, api_url: Option<&str>, google_client_id: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(id) = google_client_id.map(str::trim).filter(|i| !i.is_empty()) {
            self.auth.google_client_id = Some(id.to_string());
        }
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert!(config.content.realtime);
        assert!(config.auth.google_client_id.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8001/api"

            [content]
            realtime = false
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8001/api");
        assert!(!config.content.realtime);

        let back = AppConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_overrides_ignore_blank_values() {
        let config = AppConfig::default().with_overrides(Some("http://x/api/"), Some("  "));
        assert_eq!(config.api.base_url, "http://x/api");
        assert!(config.auth.google_client_id.is_none());
    }
}

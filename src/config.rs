use std::path::PathBuf;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Clinic Portal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend used when `CLINIC_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when `CLINIC_API_TIMEOUT_SECS` is unset or invalid.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path segment the backend reads as "no constraint" in filter endpoints.
pub const DEFAULT_FILTER_PLACEHOLDER: &str = "null";

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "clinic_portal_lib=info,warn"
}

/// Get the application data directory
/// ~/ClinicPortal/ on all platforms, falling back to the working directory.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ClinicPortal")
}

/// Default location of the persisted session file.
pub fn session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Filter placeholder must not be empty")]
    EmptyPlaceholder,
}

/// Runtime configuration for the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    pub filter_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            filter_placeholder: DEFAULT_FILTER_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Build a configuration pointing at `base_url`, other fields defaulted.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let config = Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from the environment.
    ///
    /// - `CLINIC_API_BASE_URL` (default `http://localhost:8080`)
    /// - `CLINIC_API_TIMEOUT_SECS` (default 30)
    /// - `CLINIC_FILTER_PLACEHOLDER` (default `null`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = lookup("CLINIC_API_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = match lookup("CLINIC_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Ignoring invalid CLINIC_API_TIMEOUT_SECS");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        let filter_placeholder = lookup("CLINIC_FILTER_PLACEHOLDER")
            .unwrap_or_else(|| DEFAULT_FILTER_PLACEHOLDER.to_string());

        let config = Self {
            api_base_url,
            timeout: Duration::from_secs(timeout_secs),
            filter_placeholder,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api_base_url).map_err(|e| {
            ConfigError::InvalidBaseUrl {
                url: self.api_base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.api_base_url.clone(),
                reason: "not a hierarchical URL".into(),
            });
        }
        if self.filter_placeholder.trim().is_empty() {
            return Err(ConfigError::EmptyPlaceholder);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn app_data_dir_ends_with_app_folder() {
        assert!(app_data_dir().ends_with("ClinicPortal"));
    }

    #[test]
    fn session_file_under_app_data() {
        let file = session_file();
        assert!(file.starts_with(app_data_dir()));
        assert!(file.ends_with("session.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("CLINIC_API_BASE_URL", "https://clinic.example.org/api/"),
            ("CLINIC_API_TIMEOUT_SECS", "5"),
            ("CLINIC_FILTER_PLACEHOLDER", "any"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://clinic.example.org/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.filter_placeholder, "any");
    }

    #[test]
    fn invalid_timeout_falls_back_to_default() {
        let config =
            Config::from_lookup(lookup_from(&[("CLINIC_API_TIMEOUT_SECS", "soon")])).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = Config::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn blank_placeholder_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("CLINIC_FILTER_PLACEHOLDER", "  ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPlaceholder));
    }
}

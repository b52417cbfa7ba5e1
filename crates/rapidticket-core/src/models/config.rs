//! Application configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub version: String,
    pub api: ApiConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub ip_source: IpSource,
}

/// Where the client IP shown on the form comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IpSource {
    /// `GET {base_url}/api/ip`
    Backend,
    /// `GET https://api.ipify.org?format=json`
    Public,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupConfig {
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub status_ttl_secs: u64,
    pub log_level: String,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.lookup.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            api: ApiConfig::default(),
            lookup: LookupConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl ApiConfig {
    pub const PUBLIC_IP_URL: &'static str = "https://api.ipify.org?format=json";

    /// Validate API configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Validation("API base URL cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Validation(
                "API base URL must start with http:// or https://".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::Validation(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL without a trailing slash, ready for path joining.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn ip_url(&self) -> String {
        match self.ip_source {
            IpSource::Backend => format!("{}/api/ip", self.normalized_base_url()),
            IpSource::Public => Self::PUBLIC_IP_URL.to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
            ip_source: IpSource::Backend,
        }
    }
}

impl LookupConfig {
    /// Validate lookup configuration
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms == 0 {
            return Err(Error::Validation(
                "Lookup debounce must be greater than 0".to_string(),
            ));
        }

        const MAX_DEBOUNCE_MS: u64 = 10_000;
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::Validation(format!(
                "Lookup debounce too long (max {} ms)",
                MAX_DEBOUNCE_MS
            )));
        }

        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

impl UiConfig {
    /// Validate UI configuration
    pub fn validate(&self) -> Result<()> {
        if self.status_ttl_secs == 0 {
            return Err(Error::Validation(
                "Status message lifetime must be greater than 0".to_string(),
            ));
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(Error::Validation(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.log_level,
                valid_log_levels.join(", ")
            )));
        }

        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_ttl_secs: 6,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lookup.debounce_ms, 500);
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.api.base_url = "localhost:5000".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let mut config = Config::default();
        config.lookup.debounce_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.ui.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ip_url() {
        let mut api = ApiConfig {
            base_url: "http://desk.local:5000/".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.ip_url(), "http://desk.local:5000/api/ip");

        api.ip_source = IpSource::Public;
        assert_eq!(api.ip_url(), ApiConfig::PUBLIC_IP_URL);
    }

    #[test]
    fn test_ip_source_serialization() {
        let json = serde_json::to_string(&IpSource::Public).unwrap();
        assert_eq!(json, "\"public\"");
    }
}

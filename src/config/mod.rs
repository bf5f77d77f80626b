//! Configuration module for Radgate
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`RADGATE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use radgate::config::RadgateConfig;
//!
//! // Load defaults
//! let config = RadgateConfig::default();
//! assert_eq!(config.server.port, 8000);
//!
//! // Parse from TOML
//! let toml = r#"
//! [calibration]
//! cpm_to_usv = 0.008
//! "#;
//! let config: RadgateConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.calibration.cpm_to_usv, 0.008);
//! ```

pub mod auth;
pub mod calibration;
pub mod error;
pub mod logging;
pub mod server;

pub use auth::AuthConfig;
pub use calibration::CalibrationConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the Radgate server.
///
/// Aggregates all configuration sections: HTTP server settings, device
/// authentication, tube calibration, and logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RadgateConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Device bearer-token authentication
    pub auth: AuthConfig,
    /// Dose-rate calibration constants
    pub calibration: CalibrationConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl RadgateConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports RADGATE_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(port) = std::env::var("RADGATE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("RADGATE_HOST") {
            self.server.host = host;
        }

        if let Ok(token) = std::env::var("RADGATE_DEVICE_TOKEN") {
            self.auth.device_token = Some(token);
        }

        if let Ok(interval) = std::env::var("RADGATE_POST_INTERVAL_MS") {
            if let Ok(v) = interval.parse() {
                self.calibration.post_interval_ms = v;
            }
        }
        if let Ok(factor) = std::env::var("RADGATE_CPM_TO_USV") {
            if let Ok(v) = factor.parse() {
                self.calibration.cpm_to_usv = v;
            }
        }

        if let Ok(level) = std::env::var("RADGATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("RADGATE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.calibration.post_interval_ms == 0 {
            return Err(ConfigError::Validation {
                field: "calibration.post_interval_ms".to_string(),
                message: "post interval must be non-zero".to_string(),
            });
        }

        if self.calibration.cpm_to_usv <= 0.0 {
            return Err(ConfigError::Validation {
                field: "calibration.cpm_to_usv".to_string(),
                message: "conversion factor must be positive".to_string(),
            });
        }

        if self.calibration.offline_threshold_ms == 0 {
            return Err(ConfigError::Validation {
                field: "calibration.offline_threshold_ms".to_string(),
                message: "offline threshold must be non-zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = RadgateConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.calibration.post_interval_ms, 300_000);
        assert!(config.auth.device_token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RadgateConfig::load(Some(Path::new("/nonexistent/radgate.toml")));
        assert!(matches!(err, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9100

[auth]
device_token = "s3cret"

[calibration]
cpm_to_usv = 0.008
offline_threshold_ms = 120000
"#
        )
        .unwrap();

        let config = RadgateConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.auth.device_token.as_deref(), Some("s3cret"));
        assert_eq!(config.calibration.cpm_to_usv, 0.008);
        assert_eq!(config.calibration.offline_threshold_ms, 120_000);
        // Unspecified sections keep defaults
        assert_eq!(config.calibration.post_interval_ms, 300_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        let err = RadgateConfig::load(Some(file.path()));
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_env_override_port() {
        std::env::set_var("RADGATE_PORT", "9999");
        let config = RadgateConfig::default().with_env_overrides();
        std::env::remove_var("RADGATE_PORT");

        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_config_env_override_device_token() {
        std::env::set_var("RADGATE_DEVICE_TOKEN", "env-secret");
        let config = RadgateConfig::default().with_env_overrides();
        std::env::remove_var("RADGATE_DEVICE_TOKEN");

        assert_eq!(config.auth.device_token.as_deref(), Some("env-secret"));
    }

    #[test]
    fn test_config_env_invalid_value_ignored() {
        std::env::set_var("RADGATE_CPM_TO_USV", "not-a-number");
        let config = RadgateConfig::default().with_env_overrides();
        std::env::remove_var("RADGATE_CPM_TO_USV");

        // Should keep default, not crash
        assert_eq!(config.calibration.cpm_to_usv, 0.0018);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = RadgateConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = RadgateConfig::default();
        config.calibration.post_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nonpositive_factor() {
        let mut config = RadgateConfig::default();
        config.calibration.cpm_to_usv = 0.0;
        assert!(config.validate().is_err());
    }
}

//! Runtime configuration
//!
//! Defaults match the gateway firmware's expectations; a JSON file can
//! override any subset of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the gateway relays traffic between thermostat and boiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    /// Pass frames through untouched, reporting them to the host.
    Monitor,
    /// Allow the gateway to rewrite frames in flight.
    Intercept,
}

impl fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayMode::Monitor => write!(f, "monitor"),
            GatewayMode::Intercept => write!(f, "intercept"),
        }
    }
}

impl FromStr for GatewayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monitor" => Ok(GatewayMode::Monitor),
            "intercept" => Ok(GatewayMode::Intercept),
            other => Err(ConfigError::InvalidValue {
                field: "mode".to_string(),
                message: format!("'{}' is not a gateway mode (monitor|intercept)", other),
            }),
        }
    }
}

/// Temperature bounds pushed to the gateway at session start, in the
/// firmware's raw 16-bit representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub t_min: u16,
    pub t_max: u16,
    pub t2_min: u16,
    pub t2_max: u16,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            t_min: 500,
            t_max: 900,
            t2_min: 1000,
            t2_max: 1800,
        }
    }
}

/// Complete monitor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub mode: GatewayMode,
    pub device: String,
    pub baud_rate: u32,
    pub read_timeout_ms: u64,
    pub bounds: Bounds,
    pub keepalive_secs: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            mode: GatewayMode::Monitor,
            device: "/dev/ttyAMA0".to_string(),
            baud_rate: 115_200,
            read_timeout_ms: 10_000,
            bounds: Bounds::default(),
            keepalive_secs: 6.0,
        }
    }
}

impl MonitorConfig {
    /// Load configuration from a JSON file, falling back to defaults
    /// for absent fields.
    pub fn from_file(path: &str) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config: MonitorConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.device.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "device".to_string(),
                message: "device path must not be empty".to_string(),
            });
        }
        if self.baud_rate == 0 {
            return Err(ConfigError::InvalidValue {
                field: "baud_rate".to_string(),
                message: "baud rate must be positive".to_string(),
            });
        }
        if self.read_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "read_timeout_ms".to_string(),
                message: "read timeout must be positive".to_string(),
            });
        }
        if !(self.keepalive_secs.is_finite() && self.keepalive_secs >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "keepalive_secs".to_string(),
                message: "keep-alive interval must be a non-negative number".to_string(),
            });
        }
        if self.bounds.t_min > self.bounds.t_max {
            return Err(ConfigError::InvalidValue {
                field: "bounds".to_string(),
                message: format!(
                    "t_min ({}) exceeds t_max ({})",
                    self.bounds.t_min, self.bounds.t_max
                ),
            });
        }
        if self.bounds.t2_min > self.bounds.t2_max {
            return Err(ConfigError::InvalidValue {
                field: "bounds".to_string(),
                message: format!(
                    "t2_min ({}) exceeds t2_max ({})",
                    self.bounds.t2_min, self.bounds.t2_max
                ),
            });
        }
        Ok(())
    }
}

/// Configuration loading and validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    FileRead { path: String, message: String },
    Parse { path: String, message: String },
    InvalidValue { field: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileRead { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Failed to parse config file '{}': {}", path, message)
            }
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid config value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.mode, GatewayMode::Monitor);
        assert_eq!(config.device, "/dev/ttyAMA0");
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.read_timeout_ms, 10_000);
        assert_eq!(config.bounds.t_min, 500);
        assert_eq!(config.bounds.t_max, 900);
        assert_eq!(config.bounds.t2_min, 1000);
        assert_eq!(config.bounds.t2_max, 1800);
        assert!((config.keepalive_secs - 6.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("monitor".parse::<GatewayMode>().unwrap(), GatewayMode::Monitor);
        assert_eq!(
            "intercept".parse::<GatewayMode>().unwrap(),
            GatewayMode::Intercept
        );
        assert!("passthrough".parse::<GatewayMode>().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let json = r#"{"mode": "intercept", "device": "/dev/ttyUSB0"}"#;
        let config: MonitorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, GatewayMode::Intercept);
        assert_eq!(config.device, "/dev/ttyUSB0");
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.bounds, Bounds::default());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = MonitorConfig::default();
        config.bounds.t_min = 950;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "bounds"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_baud() {
        let mut config = MonitorConfig::default();
        config.baud_rate = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_keepalive() {
        let mut config = MonitorConfig::default();
        config.keepalive_secs = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = MonitorConfig::from_file("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = MonitorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: MonitorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

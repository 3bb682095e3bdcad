// cardiorisk-core/src/config.rs
//! Calculator configuration: where the server listens and which CORS policy
//! it applies.
//!
//! Built-in defaults are embedded from `config/default_config.yaml`. A user
//! file is merged over them with [`merge_config`]. The scoring tables and the
//! weights are deliberately absent: they are not configurable.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origin: Option<String>,
    pub allow_headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl CalculatorConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: CalculatorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the embedded defaults.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: CalculatorConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;
        Ok(config)
    }

    /// Loads the defaults, then merges the first user file found in
    /// [`config_candidate_paths`] (or `explicit`, when given) over them.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let defaults = Self::load_default()?;
        let user = match explicit {
            Some(path) => Some(Self::load_from_file(path)?),
            None => match config_candidate_paths().into_iter().find(|p| p.is_file()) {
                Some(path) => Some(Self::load_from_file(&path)?),
                None => None,
            },
        };
        let merged = merge_config(defaults, user);
        merged.validate()?;
        Ok(merged)
    }

    pub fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn allow_origin(&self) -> &str {
        self.cors.allow_origin.as_deref().unwrap_or("*")
    }

    pub fn allow_headers(&self) -> &[String] {
        self.cors.allow_headers.as_deref().unwrap_or_default()
    }

    /// `host:port` as a bindable address string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(host) = &self.server.host {
            if host.trim().is_empty() {
                errors.push("`server.host` must not be empty.".to_string());
            }
        }
        if self.server.port == Some(0) {
            errors.push("`server.port` must be between 1 and 65535.".to_string());
        }
        if let Some(origin) = &self.cors.allow_origin {
            if origin != "*" && !(origin.starts_with("http://") || origin.starts_with("https://")) {
                errors.push(format!(
                    "`cors.allow_origin` must be '*' or an http(s) origin, got '{}'.",
                    origin
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Configuration validation failed:\n- {}", errors.join("\n- ")))
        }
    }
}

/// Merges a user configuration over the defaults, field by field.
pub fn merge_config(default_config: CalculatorConfig, user_config: Option<CalculatorConfig>) -> CalculatorConfig {
    let mut merged = default_config;
    let Some(user) = user_config else {
        return merged;
    };

    if let Some(host) = user.server.host {
        debug!("Overriding server host with user value: {}", host);
        merged.server.host = Some(host);
    }
    if let Some(port) = user.server.port {
        debug!("Overriding server port with user value: {}", port);
        merged.server.port = Some(port);
    }
    if let Some(origin) = user.cors.allow_origin {
        debug!("Overriding CORS origin with user value: {}", origin);
        merged.cors.allow_origin = Some(origin);
    }
    if let Some(headers) = user.cors.allow_headers {
        debug!("Overriding CORS headers with {} user value(s)", headers.len());
        merged.cors.allow_headers = Some(headers);
    }
    merged
}

/// Locations searched for a user configuration file, in priority order.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        Some(PathBuf::from("./cardiorisk.yaml")),
        dirs::config_dir().map(|p| p.join("cardiorisk").join("config.yaml")),
        dirs::home_dir().map(|p| p.join(".cardiorisk").join("config.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::load_default().unwrap();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8787);
        assert_eq!(config.allow_origin(), "*");
        assert_eq!(
            config.allow_headers(),
            ["authorization", "x-client-info", "apikey", "content-type"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let defaults = CalculatorConfig::load_default().unwrap();
        let user: CalculatorConfig = serde_yml::from_str("server:\n  port: 9000\n").unwrap();
        let merged = merge_config(defaults, Some(user));
        assert_eq!(merged.port(), 9000);
        assert_eq!(merged.host(), "127.0.0.1");
        assert_eq!(merged.allow_headers().len(), 4);
        assert_eq!(merged.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_validation_collects_every_error() {
        let config = CalculatorConfig {
            server: ServerConfig {
                host: Some(" ".to_string()),
                port: Some(0),
            },
            cors: CorsConfig {
                allow_origin: Some("example.com".to_string()),
                allow_headers: None,
            },
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("server.host"));
        assert!(message.contains("server.port"));
        assert!(message.contains("cors.allow_origin"));
    }
}

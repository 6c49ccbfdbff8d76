//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, AnnotationConfig, ObservabilityConfig, ScholarLayoutConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CITEGROWTH_*`)
/// 2. Config file (TOML), if present
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CitegrowthConfig {
    pub layout: ScholarLayoutConfig,
    pub annotation: AnnotationConfig,
    pub observability: ObservabilityConfig,
}

impl CitegrowthConfig {
    /// Load configuration from `path`, then apply environment overrides.
    ///
    /// A missing file is not an error: compiled defaults are used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CITEGROWTH_*` overrides read through `lookup`.
    ///
    /// Taking the lookup as a closure keeps tests off the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(defaults::ENV_LOG_LEVEL) {
            self.observability.log_level = level.trim().to_ascii_lowercase();
        }
        if let Some(raw) = lookup(defaults::ENV_ANNOTATION_DECIMALS) {
            self.annotation.decimals =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::ValidationFailed {
                        field: defaults::ENV_ANNOTATION_DECIMALS.to_string(),
                        message: format!("expected a small non-negative integer, got {raw:?}"),
                    })?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("layout.results_container", &self.layout.results_container),
            ("layout.article_class", &self.layout.article_class),
            ("layout.footer_links", &self.layout.footer_links),
            ("layout.author_line", &self.layout.author_line),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.layout.author_segment_delimiter.is_whitespace() {
            return Err(ConfigError::ValidationFailed {
                field: "layout.author_segment_delimiter".to_string(),
                message: "must not be whitespace".to_string(),
            });
        }
        if self.annotation.decimals > defaults::MAX_ANNOTATION_DECIMALS {
            return Err(ConfigError::ValidationFailed {
                field: "annotation.decimals".to_string(),
                message: format!("must be at most {}", defaults::MAX_ANNOTATION_DECIMALS),
            });
        }
        if !ObservabilityConfig::LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {:?}, got {:?}",
                    ObservabilityConfig::LEVELS,
                    self.observability.log_level
                ),
            });
        }
        Ok(())
    }
}

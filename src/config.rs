//! Engine configuration loaded from TOML
//!
//! Every section is optional; a missing file section falls back to the
//! defaults below.
//!
//! ```toml
//! [ids]
//! prefix = "node"
//! strategy = "timestamped"
//!
//! [catalog]
//! include_builtin = true
//! directories = ["templates"]
//!
//! [logging]
//! level = "info"
//! format = "text"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::catalog;
use crate::id::{IdGenerator, IdStrategy, DEFAULT_PREFIX};
use crate::template::{Blueprint, TemplateRegistry};

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Identifier settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdConfig {
    pub prefix: String,
    pub strategy: IdStrategy,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            strategy: IdStrategy::default(),
        }
    }
}

/// Where templates come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Register the built-in templates before any blueprint directory
    pub include_builtin: bool,
    /// Directories of `*.toml` blueprints, loaded in order
    pub directories: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            directories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ids: IdConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ids.prefix = prefix.into();
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.ids.strategy = strategy;
        self
    }

    pub fn with_builtin(mut self, include: bool) -> Self {
        self.catalog.include_builtin = include;
        self
    }

    /// Add a blueprint directory after the configured ones
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog.directories.push(dir.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// A fresh generator with the configured prefix and strategy
    pub fn id_generator(&self) -> IdGenerator {
        IdGenerator::with_prefix(&self.ids.prefix).with_strategy(self.ids.strategy)
    }

    /// Built-in templates (if enabled) followed by every blueprint directory
    pub fn load_registry(&self) -> Result<TemplateRegistry, crate::Error> {
        let mut registry = if self.catalog.include_builtin {
            catalog::builtin_registry()?
        } else {
            TemplateRegistry::new()
        };
        for dir in &self.catalog.directories {
            registry.extend(Blueprint::load_dir(dir)?)?;
        }
        info!(
            templates = registry.len(),
            categories = registry.categories().len(),
            "template registry ready"
        );
        Ok(registry)
    }
}

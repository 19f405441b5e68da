//! Console configuration
//!
//! Settings come from a TOML file, then from environment overrides. A missing
//! file is not an error; defaults are used instead.

use inventory_validation::SecurityConfig;
use log::{info, warn};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{ConsoleError, ConsoleResult};
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "INVENTORY_CONSOLE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/inventory_console.toml";

pub const PAGE_SIZE_ENV: &str = "INVENTORY_PAGE_SIZE";
pub const SEED_MOCK_DATA_ENV: &str = "INVENTORY_SEED_MOCK_DATA";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Records per page when listing
    pub page_size: u32,
    /// Start from the mock dataset instead of an empty inventory
    pub seed_mock_data: bool,
    pub security: SecurityConfig,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_LIMIT,
            seed_mock_data: true,
            security: SecurityConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Load from the configured path and apply environment overrides
    pub fn load() -> ConsoleResult<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load from an explicit path and apply environment overrides
    pub fn load_from(path: &Path) -> ConsoleResult<Self> {
        let mut config = Self::from_file_or_default(path)?;
        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConsoleError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            ConsoleError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Parse a config file, falling back to defaults when it does not exist
    pub fn from_file_or_default(path: &Path) -> ConsoleResult<Self> {
        if !path.exists() {
            warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        info!("Loading configuration from {}", path.display());
        Self::from_file(path)
    }

    /// Apply overrides from a variable lookup. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(size) => self.page_size = size,
                Err(_) => warn!("Ignoring invalid {}: '{}'", PAGE_SIZE_ENV, raw),
            }
        }

        if let Some(raw) = lookup(SEED_MOCK_DATA_ENV) {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.seed_mock_data = true,
                "0" | "false" | "no" => self.seed_mock_data = false,
                _ => warn!("Ignoring invalid {}: '{}'", SEED_MOCK_DATA_ENV, raw),
            }
        }
    }

    pub fn validate(&self) -> ConsoleResult<()> {
        if self.page_size == 0 || self.page_size > MAX_LIMIT {
            return Err(ConsoleError::Config(format!(
                "page_size must be between 1 and {} (got {})",
                MAX_LIMIT, self.page_size
            )));
        }
        if self.security.max_input_length == 0 {
            return Err(ConsoleError::Config(
                "security.max_input_length must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

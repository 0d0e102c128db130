//! Configuration loader for char-scanner
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::{default_config, CONFIG_FILE_NAME};
use crate::core::types::{ReportFormat, ScanMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_buffer")]
    pub buffer: BufferConfig,

    #[serde(default = "default_scanner")]
    pub scanner: ScannerConfig,

    #[serde(default = "default_harness")]
    pub harness: HarnessConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Buffer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferConfig {
    #[serde(default = "default_length")]
    pub length: usize,
    /// Fixed seed for a reproducible buffer; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    #[serde(default = "default_mode")]
    pub mode: ScanMode,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default = "default_max_threads")]
    pub max_threads: usize,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_warmup_iterations")]
    pub warmup_iterations: u32,
    #[serde(default = "default_report_format")]
    pub report_format: ReportFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults only when the file is missing.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<Config, ConfigError> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(ConfigError::FileNotFound(path)) => {
                debug!("No configuration at {}, using defaults", path);
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new(CONFIG_FILE_NAME).load_or_default()
}

// Default functions for serde
fn default_buffer() -> BufferConfig {
    BufferConfig {
        length: default_config().buffer.length,
        seed: None,
    }
}

fn default_scanner() -> ScannerConfig {
    let defaults = default_config();
    ScannerConfig {
        mode: defaults.scanner.mode,
        parallel: defaults.scanner.parallel,
        max_threads: defaults.scanner.max_threads,
        chunk_size: defaults.scanner.chunk_size,
    }
}

fn default_harness() -> HarnessConfig {
    let defaults = default_config();
    HarnessConfig {
        iterations: defaults.harness.iterations,
        warmup_iterations: defaults.harness.warmup_iterations,
        report_format: defaults.harness.report_format,
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_config().logging.level,
    }
}

// Individual field defaults
fn default_length() -> usize {
    default_config().buffer.length
}

fn default_mode() -> ScanMode {
    default_config().scanner.mode
}

fn default_parallel() -> bool {
    default_config().scanner.parallel
}

fn default_max_threads() -> usize {
    default_config().scanner.max_threads
}

fn default_chunk_size() -> usize {
    default_config().scanner.chunk_size
}

fn default_iterations() -> u32 {
    default_config().harness.iterations
}

fn default_warmup_iterations() -> u32 {
    default_config().harness.warmup_iterations
}

fn default_report_format() -> ReportFormat {
    default_config().harness.report_format
}

fn default_log_level() -> String {
    default_config().logging.level
}

impl Default for Config {
    fn default() -> Self {
        Config {
            buffer: default_buffer(),
            scanner: default_scanner(),
            harness: default_harness(),
            logging: default_logging(),
        }
    }
}

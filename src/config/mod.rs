//! Configuration module for char-scanner
//!
//! Provides configuration loading, validation, and default settings
//! for the benchmark harness.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults, CONFIG_FILE_NAME, DEFAULT_BUFFER_LENGTH};
pub use loader::{load_config, ConfigLoader};
pub use validator::{validate_config, ConfigValidator, MAX_BUFFER_LENGTH};

// Re-export the configuration structures
pub use loader::{BufferConfig, Config, HarnessConfig, LoggingConfig, ScannerConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

//! Default configuration values for char-scanner

use crate::core::types::{ReportFormat, ScanMode};
use serde::{Deserialize, Serialize};

/// Reference buffer length: five million bytes
pub const DEFAULT_BUFFER_LENGTH: usize = 1000 * 1000 * 5;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "char-scanner.toml";

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub buffer: BufferDefaults,
    pub scanner: ScannerDefaults,
    pub harness: HarnessDefaults,
    pub logging: LoggingDefaults,
}

/// Default buffer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BufferDefaults {
    pub length: usize,
}

/// Default scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerDefaults {
    pub mode: ScanMode,
    pub parallel: bool,
    pub max_threads: usize,
    pub chunk_size: usize,
}

/// Default harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessDefaults {
    pub iterations: u32,
    pub warmup_iterations: u32,
    pub report_format: ReportFormat,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        buffer: BufferDefaults {
            length: DEFAULT_BUFFER_LENGTH,
        },
        scanner: ScannerDefaults {
            mode: ScanMode::Bytes,
            parallel: false,
            max_threads: num_cpus::get().min(8),
            chunk_size: 65536, // 64KB
        },
        harness: HarnessDefaults {
            iterations: 100,
            warmup_iterations: 3,
            report_format: ReportFormat::Text,
        },
        logging: LoggingDefaults {
            level: "info".to_string(),
        },
    }
}

use anyhow::{Context, Result};
use tracing::info;

use char_scanner::config::{load_config, validate_config};
use char_scanner::harness::{init_logging, log_report, BenchmarkHarness};
use char_scanner::{ReportFormat, VERSION};

fn main() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    // Validator warnings need the subscriber installed
    init_logging(&config.logging).context("Failed to initialize logging")?;
    validate_config(&config).context("Invalid configuration")?;

    info!("Starting char-scanner v{}", VERSION);
    info!("Architecture: {}", std::env::consts::ARCH);

    let harness = BenchmarkHarness::setup(&config).context("Buffer setup failed")?;
    let report = harness.run();

    match config.harness.report_format {
        ReportFormat::Text => log_report(&report),
        ReportFormat::Json => {
            let json = serde_json::to_string(&report).context("Failed to encode report")?;
            println!("{}", json);
        }
    }

    Ok(())
}

use crate::app::compare::{compare_files, ComparisonReport, EXIT_ERROR};
use crate::config::CliConfig;
use crate::utils::{logger, validation::Validate};
use anyhow::Context;

/// Validates arguments, resolves configuration, installs the logger and
/// compares the two input files.
pub fn run(cli: &CliConfig) -> anyhow::Result<ComparisonReport> {
    cli.validate().context("invalid arguments")?;
    let config = cli.resolve().context("failed to load configuration")?;

    logger::init_logger(&config.logging.level, config.logging.json);
    tracing::info!("Starting seqassert");
    tracing::debug!("Resolved config: {:?}", config);

    compare_files(&cli.expected, &cli.actual, &config).context("failed to read input sequences")
}

/// Process exit code for the outcome of [`run`].
pub fn exit_code(outcome: &anyhow::Result<ComparisonReport>) -> i32 {
    match outcome {
        Ok(report) => report.exit_code(),
        Err(_) => EXIT_ERROR,
    }
}

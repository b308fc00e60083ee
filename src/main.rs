//! tracnotes - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tracnotes::config::{Config, DEFAULT_LIMIT, DEFAULT_TIMEOUT_SECS};
use tracnotes::{DigestRequest, RevisionRange, TracClient, build_digest};

/// Build a changelog digest from a Trac revision log.
#[derive(Parser, Debug)]
#[command(name = "tracnotes")]
#[command(about = "Build a categorized changelog digest from a Trac revision log")]
#[command(version)]
struct Cli {
    /// Revision range as FROM[:TO] (e.g. 57000:57100, r57000:HEAD)
    range: RevisionRange,

    /// Base URL of the Trac instance (falls back to TRAC_URL)
    #[arg(long)]
    trac_url: Option<String>,

    /// Maximum number of changesets to request from the log
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Maximum concurrent ticket lookups (unbounded if omitted)
    #[arg(long)]
    fan_out: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Step 1: Resolve configuration
    let config = Config::resolve(cli.trac_url.as_deref(), cli.limit, cli.fan_out, cli.timeout)
        .context("Invalid configuration")?;

    let client = TracClient::new(&config.trac_url, config.timeout)
        .context("Failed to set up HTTP client")?;

    info!("Fetching changesets {} from {}", cli.range, config.trac_url);

    // Step 2: Run the pipeline
    let request = DigestRequest {
        range: cli.range,
        limit: config.limit,
        fan_out: config.fan_out,
    };

    let digest = build_digest(&client, &client, &request)
        .await
        .context("Failed to download the changeset log")?;

    if digest.is_empty() {
        eprintln!("No changesets found in {}. Nothing to report.", cli.range);
        return Ok(());
    }

    // Step 3: Print the report
    print!("{}", digest.report);
    eprintln!("✓ {}", digest.summary());

    Ok(())
}

/// Log to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

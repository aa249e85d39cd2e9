//! # Settings Check
//!
//! Binary that wires the configuration subsystem together:
//! - Initialize tracing
//! - Load and validate the configuration from the environment
//! - Report the result with secrets redacted
//!
//! Exits nonzero when the configuration is rejected, so it can gate
//! container entrypoints and deploy pipelines.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings_loader::Manager;

#[derive(Parser)]
#[command(name = "settings-check")]
#[command(author, version, about = "Load and validate the service configuration", long_about = None)]
struct Cli {
    /// Print the redacted configuration as JSON instead of log lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,settings_app=debug,settings_loader=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let manager = Manager::load().context("configuration rejected")?;

    // Everything reported below goes through the redacted copy, so the
    // signing secret, database password, and S3 secret never hit stdout.
    let redacted = manager.config().redacted();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&redacted)?);
        return Ok(());
    }

    tracing::info!(
        env = %redacted.general.env,
        access_token_ttl_min = redacted.general.access_token_ttl,
        refresh_token_ttl_days = redacted.general.refresh_token_ttl,
        "general parameters"
    );
    tracing::info!("http server will bind {}", manager.http_bind_addr());
    tracing::info!("database: {}", redacted.database.dsn());
    tracing::info!(
        endpoint = %redacted.s3.endpoint,
        bucket = %redacted.s3.bucket_name,
        use_ssl = redacted.s3.use_ssl,
        "object storage"
    );
    tracing::info!("configuration OK");

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use uk_core::config::{BuildConfig, DEFAULT_FILE_NAME};
use uk_telemetry::logging::{self, LogFormat};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// ui-kit dev server -- serve the built output and the component gallery.
#[derive(Parser)]
#[command(name = "uk-dev", version, about)]
struct Cli {
    /// Path to the build config file.
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    config: PathBuf,

    /// Override `serve.port`.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override `build.out_dir`.
    #[arg(long)]
    dist: Option<String>,

    /// Emit JSON log lines.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    logging::init("uk-dev", "info", format);

    let mut config = BuildConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Some(port) = cli.port {
        config.serve.port = port;
    }
    if let Some(dist) = cli.dist {
        config.build.out_dir = dist;
    }
    config.validate().context("invalid configuration")?;

    uk_devserver::serve(config).await
}

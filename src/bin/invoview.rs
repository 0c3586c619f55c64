use std::path::PathBuf;

use clap::Parser;
use invoview::config::ViewerConfig;
use invoview::server;

/// Read-only viewer for structured invoice-extraction model outputs.
#[derive(Parser, Debug)]
#[command(name = "invoview", version, about)]
struct Args {
    /// Path to a TOML config file.
    #[arg(long, conflicts_with = "data_root")]
    config: Option<PathBuf>,

    /// Directory holding one subdirectory of JSON outputs per model.
    #[arg(long, default_value = "data/outputs")]
    data_root: PathBuf,

    /// Bind address override.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::for_root(args.data_root),
    };
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    server::serve(config).await?;
    Ok(())
}

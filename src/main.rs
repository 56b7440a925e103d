use anyhow::Result;
use clap::Parser;
use etalk::{util, App, Config};
use std::fs::{self, OpenOptions};

/// Terminal chat client for the e-talk RAG backend
#[derive(Debug, Parser)]
#[command(name = "etalk", version, about)]
struct Cli {
    /// Base URL of the e-talk backend (overrides config and ETALK_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.api_url);

    // Initialize logging to file (~/.etalk/logs/etalk.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    // Create and run app
    let mut app = App::new(config);
    app.run().await
}

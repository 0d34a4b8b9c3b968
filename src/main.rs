use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "arxiv-listener")]
#[command(about = "Arxiv Listener Dashboard - arXiv channel and alert settings")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    arxiv_listener::gui::run_gui()
}

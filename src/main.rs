use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use unscramble::config::CliConfig;
use unscramble::{Config, GameInterface, VERSION};

#[derive(Parser)]
#[command(name = "unscramble")]
#[command(about = "Guess the original word from its scrambled letters")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible sequence of words
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color theme (default, dark, light)
    #[arg(short, long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(CliConfig {
        log_level: cli.log_level,
        debug: cli.debug,
        theme: cli.theme,
        seed: cli.seed,
    });
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("unscramble={},warn", config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Unscramble v{}", VERSION);

    let mut game_interface = GameInterface::new(config)?;

    if let Err(e) = game_interface.run().await {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    info!("Game session ended");
    Ok(())
}

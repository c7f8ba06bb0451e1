use anyhow::{Context, Result};
use calcpad::config::Config;
use calcpad::shell::Shell;
use calcpad::store::{FileStore, KeyValueStore, MemoryStore};
use calcpad::CalculatorBuilder;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calcpad")]
#[command(about = "Keypad calculator with a persisted history", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CALCPAD_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the history file
    #[arg(long, env = "CALCPAD_HISTORY_DIR")]
    history_dir: Option<PathBuf>,

    /// Keep history in memory only for this session
    #[arg(long)]
    ephemeral: bool,

    /// Delete the stored history and exit
    #[arg(long)]
    clear_history: bool,

    /// Do not draw the keypad
    #[arg(long)]
    no_keypad: bool,

    /// Log level
    #[arg(long, env = "CALCPAD_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let mut options = config.display;
    if cli.no_keypad {
        options.show_keypad = false;
    }

    let backend: Box<dyn KeyValueStore> = if cli.ephemeral || !config.history.enabled {
        info!("history kept in memory for this session");
        Box::new(MemoryStore::new())
    } else {
        let directory = cli
            .history_dir
            .or(config.history.directory)
            .or_else(FileStore::default_directory)
            .context("no history directory configured and no platform data directory found")?;
        info!(directory = %directory.display(), "history stored on disk");
        Box::new(FileStore::new(directory))
    };

    let mut calculator = CalculatorBuilder::new()
        .store(backend)
        .history_key(config.history.key)
        .build()
        .context("failed to start calculator")?;

    if cli.clear_history {
        calculator.clear_history();
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(calculator, options)
        .run(stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;

    Ok(())
}

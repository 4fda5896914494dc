mod cli;
mod commands;
mod repl;

use std::process::ExitCode;

use brain_common::{BrainError, ConfigError};
use brain_config::BrainConfig;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};

/// Load config from `--config` or the platform default, then apply `--url`.
fn load_config(args: &Args) -> Result<BrainConfig, BrainError> {
    let mut config = match &args.config {
        Some(path) => brain_config::load_config_from(path)?,
        None => brain_config::load_config()?,
    };
    apply_url_override(&mut config, args.url.as_deref())?;
    Ok(config)
}

/// `--url` replaces `backend.url`; the result is validated again.
fn apply_url_override(config: &mut BrainConfig, url: Option<&str>) -> Result<(), ConfigError> {
    if let Some(url) = url {
        config.backend.url = url.to_string();
        brain_config::validation::validate(config)?;
    }
    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins, then `--log-level`,
/// then the configured level for the workspace crates.
fn init_logging(args: &Args, config: Option<&BrainConfig>) {
    let level = config
        .map(|c| c.logging.level.as_directive())
        .unwrap_or("info");
    let fallback = format!("brain={level},brain_chat={level},brain_config={level}");
    let directive = args.log_level.clone().unwrap_or(fallback);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .unwrap_or_else(|_| EnvFilter::new("brain=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args, config: BrainConfig) -> Result<(), BrainError> {
    match args.command.unwrap_or(Command::Chat) {
        Command::Chat => repl::run(&config).await,
        Command::Ask { question, json } => commands::ask(&config, &question.join(" "), json).await,
        Command::Health => commands::health(&config).await,
        Command::Eval => commands::eval(&config).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = load_config(&args);
    init_logging(&args, config.as_ref().ok());

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("config error: {e}");
            eprintln!("brain: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Project Brain v{} (backend {})",
        env!("CARGO_PKG_VERSION"),
        config.backend.url
    );

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("brain: {e}");
            ExitCode::FAILURE
        }
    }
}

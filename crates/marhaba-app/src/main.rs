use std::path::PathBuf;

use clap::{Parser, Subcommand};
use marhaba_config::Config;
use marhaba_io::{DatasetLoader, FileStore};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod controller;
pub mod events;
pub mod input;
pub mod render;
pub mod ui;


use self::controller::AppController;

#[derive(Parser, Debug)]
#[command(name = "marhaba", about = "English–Arabic glossary converter and viewer")]
struct Cli {
    /// JSON config file
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,
    /// Log as JSON lines
    #[arg(long)]
    json_logs: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the spreadsheet into the JSON data file
    Convert {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Browse topics and search interactively
    Browse,
    /// Print every term matching a query
    Search { query: String },
    /// Load a spreadsheet into the cached dataset
    Import {
        path: PathBuf,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Drop the cached dataset
    ClearCache,
}

fn init_tracing(config: &Config, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json || config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    init_tracing(&config, cli.json_logs);

    let loader = DatasetLoader::new(
        FileStore::new(&config.data.cache_dir),
        config.data.cache_key.clone(),
        config.data.words_path.clone(),
    );

    match cli.command.unwrap_or(Command::Browse) {
        Command::Convert { input, output } => {
            let input = input.unwrap_or_else(|| config.convert.input.clone());
            let output = output.unwrap_or_else(|| config.convert.output.clone());
            commands::convert(&input, &output).await
        }
        Command::Browse => browse(config, loader).await,
        Command::Search { query } => commands::search(&loader, &query).await,
        Command::Import { path, password } => {
            commands::import(loader, &config.import, &path, password.as_deref()).await
        }
        Command::ClearCache => commands::clear_cache(loader),
    }
}

async fn browse(config: Config, loader: DatasetLoader<FileStore>) -> anyhow::Result<()> {
    let controller = AppController::new(config.channel_capacity);
    let mut tasks = controller.spawn_tasks(loader, config.import, config.ui);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("task finished"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e}");
        }
    }

    Ok(())
}

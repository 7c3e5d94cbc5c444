//! lexidrill CLI — the user-facing interactive vocabulary trainer.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use lexidrill_core::traits::WordStore;
use lexidrill_dictionary::config::load_config_from;
use lexidrill_dictionary::create_dictionary;
use lexidrill_store::SqliteStore;

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "lexidrill", version, about = "Interactive vocabulary trainer")]
struct Cli {
    /// Config file path (default: lexidrill.toml, then
    /// ~/.config/lexidrill/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Database file (default: vocabulary.db next to the executable)
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexidrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config_from(cli.config.as_deref())?;
    let db_path = cli.db.unwrap_or_else(|| config.database_path());
    tracing::info!(db = %db_path.display(), "starting");

    let store = Arc::new(SqliteStore::open(&db_path).await?);
    let dictionary = create_dictionary(&config.dictionary);

    let result = commands::menu_loop(Arc::clone(&store) as Arc<dyn WordStore>, dictionary).await;

    store.close().await;
    result
}

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use laureates_core::constants::{DB_PATH_ENV, DEFAULT_DB_FILE, DEFAULT_HTTP_PORT};
use laureates_storage::Storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "laureates")]
#[command(about = "Nobel laureate importer and CRUD HTTP service", long_about = None)]
struct Cli {
    /// SQLite database file (falls back to $LAUREATES_DB_PATH, then ./nobeldata.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a laureate dataset (JSON array) into the database
    Import { file: PathBuf },
    /// Serve the HTTP API
    Serve {
        #[arg(short, long, default_value_t = DEFAULT_HTTP_PORT)]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Import this dataset before serving
        #[arg(long)]
        import: Option<PathBuf>,
    },
    /// Print the distinct countries stored on addresses
    Countries,
    /// Print every stored winner
    Winners,
}

pub(crate) fn get_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DB_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn open_storage(db_path: &Path) -> Result<Arc<Storage>> {
    ensure_db_dir(db_path)?;
    Ok(Arc::new(Storage::new(db_path)?))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path(cli.db);

    match cli.command {
        Commands::Import { file } => commands::import::run(&db_path, &file).await?,
        Commands::Serve { port, host, import } => {
            commands::serve::run(&db_path, port, host, import).await?;
        },
        Commands::Countries => commands::query::countries(&db_path)?,
        Commands::Winners => commands::query::winners(&db_path)?,
    }

    Ok(())
}

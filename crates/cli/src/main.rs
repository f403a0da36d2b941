use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "geocat")]
#[command(about = "Study catalog server for GEO metadata", long_about = None)]
struct Cli {
    /// Path to the catalog database (default: platform data dir).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Directory of viewer assets to serve at `/`.
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Create the database schema (idempotent).
    Init,
    /// Bulk-load studies from a CSV file.
    Load { file: PathBuf },
    /// List studies matching the given criteria as JSON.
    Find {
        #[arg(long)]
        organism: Option<String>,
        #[arg(long)]
        data_type: Option<String>,
        #[arg(long)]
        molecule: Option<String>,
        #[arg(long)]
        superseries: Option<String>,
    },
    /// Fetch one study by id.
    Get { id: i64 },
    /// Print total and grouped study counts.
    Stats,
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("geocat")
        .join("catalog.db")
}

fn ensure_db_dir(db_path: &std::path::Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(default_db_path);
    ensure_db_dir(&db_path)?;

    match cli.command {
        Commands::Serve { port, host, assets } => {
            commands::serve::run(&db_path, port, host, assets).await
        },
        Commands::Init => commands::query::init(&db_path),
        Commands::Load { file } => commands::load::run(&db_path, &file),
        Commands::Find { organism, data_type, molecule, superseries } => {
            commands::query::find(&db_path, organism, data_type, molecule, superseries)
        },
        Commands::Get { id } => commands::query::get(&db_path, id),
        Commands::Stats => commands::query::stats(&db_path),
    }
}

// ABOUTME: CLI entry point for mongo-sql-exporter
// ABOUTME: Parses commands and routes to appropriate handlers

use clap::{Parser, Subcommand};
use mongo_sql_exporter::commands;
use mongo_sql_exporter::config::ExportConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mongo-sql-exporter")]
#[command(about = "Snapshot export of MongoDB collections as MySQL INSERT statements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the users, shops, and tags collections to a timestamped .sql file
    Export {
        /// MongoDB connection string (falls back to EXPORTER_SOURCE_URL)
        #[arg(long)]
        source: Option<String>,
        /// Source database name (falls back to EXPORTER_DATABASE)
        #[arg(long)]
        database: Option<String>,
        /// Directory the .sql file is written into; must exist (default: output)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Verify the source is reachable and report collection sizes
    Check {
        /// MongoDB connection string (falls back to EXPORTER_SOURCE_URL)
        #[arg(long)]
        source: Option<String>,
        /// Source database name (falls back to EXPORTER_DATABASE)
        #[arg(long)]
        database: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            source,
            database,
            output_dir,
        } => {
            let config = ExportConfig::resolve(source, database, output_dir)?;
            commands::export(&config).await
        }
        Commands::Check { source, database } => {
            let config = ExportConfig::resolve(source, database, None)?;
            commands::check(&config).await
        }
    }
}

// ABOUTME: The export command - snapshot three collections into one SQL file
// ABOUTME: Reads users, shops, and tags in fixed order and writes the dump

use crate::config::ExportConfig;
use crate::{output, sql, store};
use anyhow::{Context, Result};

pub async fn export(config: &ExportConfig) -> Result<()> {
    tracing::info!("Starting export from database '{}'", config.database);

    let client = store::connect(&config.source_url)
        .await
        .context("Failed to connect to source store")?;
    let db = client.database(&config.database);
    tracing::info!("✓ Connected to source");

    // Fixed order keeps the output file content deterministic.
    let users = store::reader::read_collection(&db, store::USERS_COLLECTION).await?;
    let users_sql = sql::users_statement(&users)
        .context("Failed to generate users statement")?;
    tracing::info!("✓ Generated users statement ({} rows)", users.len());

    let shops = store::reader::read_collection(&db, store::SHOPS_COLLECTION).await?;
    let stores_sql = sql::stores_statement(&shops)
        .context("Failed to generate stores statement")?;
    tracing::info!("✓ Generated stores statement ({} rows)", shops.len());

    let tags = store::reader::read_collection(&db, store::TAGS_COLLECTION).await?;
    let tags_sql = sql::tags_statement(&tags)
        .context("Failed to generate tags statement")?;
    tracing::info!("✓ Generated tags statement ({} rows)", tags.len());

    let path = output::write_statements(&config.output_dir, &[users_sql, stores_sql, tags_sql])
        .context("Failed to write export file")?;

    tracing::info!("✅ Export complete: {}", path.display());
    Ok(())
}

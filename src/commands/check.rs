// ABOUTME: Pre-flight check command for export readiness
// ABOUTME: Verifies connectivity and reports per-collection document counts

use crate::config::ExportConfig;
use crate::store;
use anyhow::{Context, Result};

pub async fn check(config: &ExportConfig) -> Result<()> {
    tracing::info!("Checking source database '{}'", config.database);

    let client = store::connect(&config.source_url)
        .await
        .context("Failed to connect to source store")?;
    let db = client.database(&config.database);
    tracing::info!("✓ Connected to source");

    for collection in [
        store::USERS_COLLECTION,
        store::SHOPS_COLLECTION,
        store::TAGS_COLLECTION,
    ] {
        let count = store::reader::count_documents(&db, collection)
            .await
            .with_context(|| format!("Failed to count collection '{}'", collection))?;
        tracing::info!("✓ Collection '{}': {} documents", collection, count);
    }

    tracing::info!("✅ Source is reachable - ready to export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_check_with_unreachable_source_fails() {
        let config = ExportConfig {
            source_url: "mongodb://127.0.0.1:1/db?serverSelectionTimeoutMS=200".to_string(),
            database: "appdata".to_string(),
            output_dir: PathBuf::from("output"),
        };

        let result = check(&config).await;
        assert!(result.is_err());
    }
}

// ABOUTME: Cursor-based document retrieval from source collections
// ABOUTME: Exhausts the cursor to completion and aborts on mid-stream errors

use crate::error::ExportError;
use bson::Document;
use futures::stream::StreamExt;
use mongodb::Database;

/// Read every document currently in a collection.
///
/// Issues an unfiltered `find` and drains the cursor page by page until the
/// driver signals the end of the stream. A cursor error mid-stream aborts
/// the whole read; a partial snapshot is never returned. No ordering is
/// imposed beyond whatever the store yields.
///
/// The full result set is held in memory.
pub async fn read_collection(
    database: &Database,
    collection_name: &str,
) -> Result<Vec<Document>, ExportError> {
    tracing::info!("Reading all documents from collection '{}'", collection_name);

    let collection = database.collection::<Document>(collection_name);

    let mut cursor = collection
        .find(None, None)
        .await
        .map_err(|e| ExportError::retrieval(format!("querying collection '{}'", collection_name), e))?;

    let mut documents = Vec::new();

    while let Some(result) = cursor.next().await {
        let document = result.map_err(|e| {
            ExportError::retrieval(
                format!("reading cursor for collection '{}'", collection_name),
                e,
            )
        })?;
        documents.push(document);
    }

    tracing::info!(
        "Read {} documents from collection '{}'",
        documents.len(),
        collection_name
    );

    Ok(documents)
}

/// Estimated document count for a collection, used by the pre-flight check.
pub async fn count_documents(
    database: &Database,
    collection_name: &str,
) -> Result<u64, ExportError> {
    tracing::debug!("Counting documents in collection '{}'", collection_name);

    let collection = database.collection::<Document>(collection_name);

    collection.estimated_document_count(None).await.map_err(|e| {
        ExportError::retrieval(format!("counting collection '{}'", collection_name), e)
    })
}

// ABOUTME: Typed error kinds for the export pipeline
// ABOUTME: Distinguishes configuration, retrieval, mapping, and write failures

use thiserror::Error;

/// Failure kinds surfaced by the export pipeline.
///
/// Every library function in this crate returns one of these variants; the
/// command layer wraps them in `anyhow` for reporting. All variants are
/// fatal for the run: no retry policy, no partial output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Missing or invalid run configuration, raised before any work starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The source store could not be reached or a cursor failed mid-stream.
    #[error("retrieval failed while {context}")]
    Retrieval {
        context: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// A document did not have the shape its target table requires.
    #[error("cannot map document '{id}' in collection '{collection}': {reason}")]
    Mapping {
        collection: String,
        id: String,
        reason: String,
    },

    /// The output file could not be created or written.
    #[error("failed to write export file")]
    Write(#[from] std::io::Error),
}

impl ExportError {
    pub(crate) fn retrieval(context: impl Into<String>, source: mongodb::error::Error) -> Self {
        ExportError::Retrieval {
            context: context.into(),
            source,
        }
    }
}

// ABOUTME: Run configuration resolved once at startup
// ABOUTME: Merges CLI flags with environment fallbacks and validates the result

use crate::error::ExportError;
use std::env;
use std::path::PathBuf;

/// Environment fallback for `--source`.
pub const SOURCE_URL_ENV: &str = "EXPORTER_SOURCE_URL";
/// Environment fallback for `--database`.
pub const DATABASE_ENV: &str = "EXPORTER_DATABASE";
/// Directory the export file lands in when `--output-dir` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything one export run needs, validated before any network call.
///
/// Built once in `main` and passed by reference from then on; nothing in
/// the pipeline mutates it.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// MongoDB connection string, including credentials.
    pub source_url: String,
    /// Name of the source database holding the three collections.
    pub database: String,
    /// Pre-existing directory the timestamped `.sql` file is written into.
    pub output_dir: PathBuf,
}

impl ExportConfig {
    /// Resolve configuration from CLI flags, falling back to the
    /// `EXPORTER_SOURCE_URL` and `EXPORTER_DATABASE` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Config` if the source URL or database name is
    /// missing everywhere, or if the source URL is not a MongoDB URL.
    pub fn resolve(
        source: Option<String>,
        database: Option<String>,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, ExportError> {
        let source_url = source
            .or_else(|| env::var(SOURCE_URL_ENV).ok())
            .ok_or_else(|| {
                ExportError::Config(format!(
                    "no source URL given: pass --source or set {}",
                    SOURCE_URL_ENV
                ))
            })?;

        let database = database
            .or_else(|| env::var(DATABASE_ENV).ok())
            .ok_or_else(|| {
                ExportError::Config(format!(
                    "no database name given: pass --database or set {}",
                    DATABASE_ENV
                ))
            })?;

        if database.trim().is_empty() {
            return Err(ExportError::Config(
                "database name cannot be empty".to_string(),
            ));
        }

        let source_url = crate::store::validate_source_url(&source_url)?;

        Ok(ExportConfig {
            source_url,
            database,
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_explicit_args() {
        let config = ExportConfig::resolve(
            Some("mongodb://localhost:27017".to_string()),
            Some("appdata".to_string()),
            Some(PathBuf::from("dumps")),
        )
        .unwrap();

        assert_eq!(config.source_url, "mongodb://localhost:27017");
        assert_eq!(config.database, "appdata");
        assert_eq!(config.output_dir, PathBuf::from("dumps"));
    }

    #[test]
    fn test_resolve_defaults_output_dir() {
        let config = ExportConfig::resolve(
            Some("mongodb://localhost:27017".to_string()),
            Some("appdata".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_resolve_rejects_empty_database() {
        let result = ExportConfig::resolve(
            Some("mongodb://localhost:27017".to_string()),
            Some("   ".to_string()),
            None,
        );

        assert!(matches!(result, Err(ExportError::Config(_))));
    }

    #[test]
    fn test_resolve_rejects_non_mongodb_url() {
        let result = ExportConfig::resolve(
            Some("postgresql://localhost/db".to_string()),
            Some("appdata".to_string()),
            None,
        );

        assert!(matches!(result, Err(ExportError::Config(_))));
    }
}

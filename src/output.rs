// ABOUTME: Output file writing for generated SQL statements
// ABOUTME: Serializes statements verbatim to a timestamped file

use crate::error::ExportError;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write the generated statements to `<dir>/<YYYYMMDD_HHMMSS>.sql`.
///
/// Statements are written verbatim in the order given. The target directory
/// must already exist; it is never created here. A failure mid-write may
/// leave a truncated file behind; no recovery is attempted.
pub fn write_statements(dir: &Path, statements: &[String]) -> Result<PathBuf, ExportError> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}.sql", timestamp));

    tracing::info!(
        "Writing {} statements to {}",
        statements.len(),
        path.display()
    );

    let mut file = fs::File::create(&path)?;
    for statement in statements {
        file.write_all(statement.as_bytes())?;
    }

    Ok(path)
}

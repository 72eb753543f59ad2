// ABOUTME: SQL INSERT statement generation for exported collections
// ABOUTME: Builds one multi-row INSERT IGNORE statement per target table

pub mod rows;

use crate::error::ExportError;
use bson::Document;
use rows::{StoreRow, TagRow, UserRow};

pub const USERS_TABLE: &str = "users";
pub const USERS_COLUMNS: [&str; 8] = [
    "uid",
    "username",
    "email",
    "hashed_password",
    "role",
    "status",
    "created_at",
    "updated_at",
];

pub const STORES_TABLE: &str = "stores";
pub const STORES_COLUMNS: [&str; 6] = [
    "url",
    "ref_id",
    "platform",
    "is_active",
    "created_at",
    "updated_at",
];

pub const TAGS_TABLE: &str = "tags";
pub const TAGS_COLUMNS: [&str; 4] = ["ref_id", "name", "created_at", "updated_at"];

/// Build one multi-row `INSERT IGNORE` statement.
///
/// Layout:
///
/// ```text
/// INSERT IGNORE INTO <table>(`col1`, `col2`, ...)
/// VALUES
///     (<row1 values>),
///     (<row2 values>);
/// ```
///
/// Row lines are tab-indented and comma-separated; the final row ends the
/// statement with `;`. An empty row set still yields the header followed by
/// a bare `;` terminator with zero row lines.
///
/// `INSERT IGNORE` skips rows whose key already exists instead of aborting
/// the statement, which keeps re-imports idempotent.
pub fn build_insert(table: &str, columns: &[&str], row_literals: &[String]) -> String {
    let column_list = columns
        .iter()
        .map(|c| format!("`{}`", c))
        .collect::<Vec<_>>()
        .join(", ");

    let mut statement = format!("INSERT IGNORE INTO {}({})\nVALUES\n", table, column_list);

    if row_literals.is_empty() {
        statement.push_str(";\n");
        return statement;
    }

    for (i, literal) in row_literals.iter().enumerate() {
        statement.push('\t');
        statement.push_str(literal);
        if i + 1 < row_literals.len() {
            statement.push_str(",\n");
        } else {
            statement.push_str(";\n");
        }
    }

    statement
}

/// Generate the `users` INSERT statement from raw user documents.
pub fn users_statement(documents: &[Document]) -> Result<String, ExportError> {
    let literals = documents
        .iter()
        .map(|doc| UserRow::from_document(doc).map(|row| row.sql_literal()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(build_insert(USERS_TABLE, &USERS_COLUMNS, &literals))
}

/// Generate the `stores` INSERT statement from raw shop documents.
pub fn stores_statement(documents: &[Document]) -> Result<String, ExportError> {
    let literals = documents
        .iter()
        .map(|doc| StoreRow::from_document(doc).map(|row| row.sql_literal()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(build_insert(STORES_TABLE, &STORES_COLUMNS, &literals))
}

/// Generate the `tags` INSERT statement from raw tag documents.
pub fn tags_statement(documents: &[Document]) -> Result<String, ExportError> {
    let literals = documents
        .iter()
        .map(|doc| TagRow::from_document(doc).map(|row| row.sql_literal()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(build_insert(TAGS_TABLE, &TAGS_COLUMNS, &literals))
}

// ABOUTME: Typed row records mapped from source documents
// ABOUTME: Hard-fails on missing or mistyped fields instead of skipping rows

use crate::error::ExportError;
use crate::store::{SHOPS_COLLECTION, TAGS_COLLECTION, USERS_COLLECTION};
use bson::{Bson, Document};

/// Render a document's `_id` as a string identifier.
///
/// ObjectId becomes its 24-char hex form, strings pass through, and integer
/// ids are rendered in decimal. Anything else fails the mapping: exported
/// ids must equal the source identifiers or re-importing the dump stops
/// being idempotent.
fn document_id(document: &Document, collection: &str) -> Result<String, ExportError> {
    match document.get("_id") {
        Some(Bson::ObjectId(oid)) => Ok(oid.to_hex()),
        Some(Bson::String(s)) => Ok(s.clone()),
        Some(Bson::Int32(i)) => Ok(i.to_string()),
        Some(Bson::Int64(i)) => Ok(i.to_string()),
        Some(other) => Err(ExportError::Mapping {
            collection: collection.to_string(),
            id: "<unknown>".to_string(),
            reason: format!("unsupported _id type {:?}", other.element_type()),
        }),
        None => Err(ExportError::Mapping {
            collection: collection.to_string(),
            id: "<unknown>".to_string(),
            reason: "document has no _id field".to_string(),
        }),
    }
}

/// Extract a required string field, failing on absence or any other type.
fn require_str(
    document: &Document,
    collection: &str,
    id: &str,
    field: &str,
) -> Result<String, ExportError> {
    match document.get(field) {
        Some(Bson::String(s)) => Ok(s.clone()),
        Some(other) => Err(ExportError::Mapping {
            collection: collection.to_string(),
            id: id.to_string(),
            reason: format!(
                "field '{}' has type {:?}, expected string",
                field,
                other.element_type()
            ),
        }),
        None => Err(ExportError::Mapping {
            collection: collection.to_string(),
            id: id.to_string(),
            reason: format!("missing field '{}'", field),
        }),
    }
}

/// One row of the target `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub uid: String,
    pub email: String,
}

impl UserRow {
    pub fn from_document(document: &Document) -> Result<Self, ExportError> {
        let uid = document_id(document, USERS_COLLECTION)?;
        let email = require_str(document, USERS_COLLECTION, &uid, "email")?;
        Ok(UserRow { uid, email })
    }

    /// Value tuple for one `users` row. `role` is always `'user'` and
    /// `status` always `-10`; timestamps are left to the server.
    pub fn sql_literal(&self) -> String {
        format!(
            "('{}', NULL, '{}', NULL, 'user', -10, sysdate(), sysdate())",
            self.uid, self.email
        )
    }
}

/// One row of the target `stores` table, mapped from a `shops` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRow {
    pub ref_id: String,
    pub url: String,
    pub platform: String,
}

impl StoreRow {
    pub fn from_document(document: &Document) -> Result<Self, ExportError> {
        let ref_id = document_id(document, SHOPS_COLLECTION)?;
        let url = require_str(document, SHOPS_COLLECTION, &ref_id, "url")?;
        // The source schema really does spell this field "flatform";
        // reading "platform" would come back empty for every document.
        // TODO: switch to "platform" once the upstream schema is renamed.
        let platform = require_str(document, SHOPS_COLLECTION, &ref_id, "flatform")?;
        Ok(StoreRow {
            ref_id,
            url,
            platform,
        })
    }

    /// Value tuple for one `stores` row. `is_active` is always `1`.
    pub fn sql_literal(&self) -> String {
        format!(
            "('{}', '{}', '{}', 1, sysdate(), sysdate())",
            self.url, self.ref_id, self.platform
        )
    }
}

/// One row of the target `tags` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRow {
    pub ref_id: String,
    pub name: String,
}

impl TagRow {
    pub fn from_document(document: &Document) -> Result<Self, ExportError> {
        let ref_id = document_id(document, TAGS_COLLECTION)?;
        let name = require_str(document, TAGS_COLLECTION, &ref_id, "tagname")?;
        Ok(TagRow { ref_id, name })
    }

    pub fn sql_literal(&self) -> String {
        format!(
            "('{}', '{}', sysdate(), sysdate())",
            self.ref_id, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn test_user_row_from_document() {
        let doc = doc! { "_id": "abc123", "email": "a@b.com" };
        let row = UserRow::from_document(&doc).unwrap();

        assert_eq!(row.uid, "abc123");
        assert_eq!(row.email, "a@b.com");
    }

    #[test]
    fn test_user_row_literal() {
        let row = UserRow {
            uid: "abc123".to_string(),
            email: "a@b.com".to_string(),
        };
        assert_eq!(
            row.sql_literal(),
            "('abc123', NULL, 'a@b.com', NULL, 'user', -10, sysdate(), sysdate())"
        );
    }

    #[test]
    fn test_user_row_missing_email_fails() {
        let doc = doc! { "_id": "abc123" };
        let err = UserRow::from_document(&doc).unwrap_err();

        match err {
            ExportError::Mapping {
                collection,
                id,
                reason,
            } => {
                assert_eq!(collection, "users");
                assert_eq!(id, "abc123");
                assert!(reason.contains("email"));
            }
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn test_user_row_non_string_email_fails() {
        let doc = doc! { "_id": "abc123", "email": 42 };
        let err = UserRow::from_document(&doc).unwrap_err();

        match err {
            ExportError::Mapping { reason, .. } => {
                assert!(reason.contains("expected string"));
            }
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn test_store_row_from_document() {
        let doc = doc! { "_id": "s1", "url": "http://x", "flatform": "shopify" };
        let row = StoreRow::from_document(&doc).unwrap();

        assert_eq!(row.ref_id, "s1");
        assert_eq!(row.url, "http://x");
        assert_eq!(row.platform, "shopify");
        assert_eq!(
            row.sql_literal(),
            "('http://x', 's1', 'shopify', 1, sysdate(), sysdate())"
        );
    }

    #[test]
    fn test_store_row_reads_flatform_not_platform() {
        // A correctly-spelled "platform" field is NOT what the source
        // schema carries, so a document using it must fail the mapping.
        let doc = doc! { "_id": "s1", "url": "http://x", "platform": "shopify" };
        let err = StoreRow::from_document(&doc).unwrap_err();

        match err {
            ExportError::Mapping { reason, .. } => {
                assert!(reason.contains("flatform"));
            }
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn test_tag_row_from_document() {
        let doc = doc! { "_id": "t1", "tagname": "sale" };
        let row = TagRow::from_document(&doc).unwrap();

        assert_eq!(row.ref_id, "t1");
        assert_eq!(row.name, "sale");
        assert_eq!(row.sql_literal(), "('t1', 'sale', sysdate(), sysdate())");
    }

    #[test]
    fn test_document_id_object_id() {
        let oid = ObjectId::new();
        let doc = doc! { "_id": oid, "tagname": "sale" };
        let row = TagRow::from_document(&doc).unwrap();

        assert_eq!(row.ref_id, oid.to_hex());
        assert_eq!(row.ref_id.len(), 24);
    }

    #[test]
    fn test_document_id_integer() {
        let doc = doc! { "_id": 7i64, "tagname": "sale" };
        let row = TagRow::from_document(&doc).unwrap();

        assert_eq!(row.ref_id, "7");
    }

    #[test]
    fn test_document_missing_id_fails() {
        let doc = doc! { "tagname": "sale" };
        let err = TagRow::from_document(&doc).unwrap_err();

        match err {
            ExportError::Mapping { reason, .. } => {
                assert!(reason.contains("_id"));
            }
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn test_document_unsupported_id_type_fails() {
        let doc = doc! { "_id": true, "tagname": "sale" };
        let err = TagRow::from_document(&doc).unwrap_err();

        match err {
            ExportError::Mapping { reason, .. } => {
                assert!(reason.contains("unsupported _id type"));
            }
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn test_mapping_failure_is_deterministic() {
        let doc = doc! { "_id": "u9" };
        let first = UserRow::from_document(&doc).unwrap_err().to_string();
        let second = UserRow::from_document(&doc).unwrap_err().to_string();

        assert_eq!(first, second);
    }
}

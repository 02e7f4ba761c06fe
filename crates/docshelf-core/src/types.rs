//! Document metadata record — the one entity the service stores.

use serde::{Deserialize, Serialize};

/// Timestamp format for `uploadDate`, matching the frontend's display format.
pub const UPLOAD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metadata for an ingested document. Immutable after construction; the
/// catalog never updates a record in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    pub category: String,
    pub summary: String,
}

impl DocumentRecord {
    /// Build a record for a freshly ingested document, minting a new id and
    /// capturing the current local time.
    pub fn new(title: impl Into<String>, category: String, summary: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            upload_date: chrono::Local::now().format(UPLOAD_DATE_FORMAT).to_string(),
            category,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = DocumentRecord::new("report.pdf", "Report".into(), "A report.".into());
        let json = serde_json::to_value(&record).unwrap();

        assert!(json["uploadDate"].is_string());
        assert_eq!(json["title"], "report.pdf");
        assert!(json.get("upload_date").is_none());
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = DocumentRecord::new("a", "other".into(), "x".into());
        let b = DocumentRecord::new("a", "other".into(), "x".into());
        assert_ne!(a.id, b.id);
    }
}

//! API shape tests — validates that response JSON matches what the
//! companion front-end expects: camelCase field names, the fixed delete
//! message, and the `{"error": ...}` failure body.

use docshelf_core::DocumentRecord;

/// Verify the upload/list record shape:
/// { id, title, uploadDate, category, summary }
#[test]
fn test_document_record_shape() {
    let record = DocumentRecord::new(
        "quarterly-report.pdf",
        "Report".to_string(),
        "A quarterly financial report.".to_string(),
    );
    let json = serde_json::to_value(&record).unwrap();

    assert!(json["id"].is_string());
    assert!(json["title"].is_string());
    assert!(json["uploadDate"].is_string());
    assert!(json["category"].is_string());
    assert!(json["summary"].is_string());

    // Exactly the five fields, nothing extra.
    assert_eq!(json.as_object().unwrap().len(), 5);
}

/// GET /documents returns a bare JSON array of records.
#[test]
fn test_documents_list_shape() {
    let records = vec![
        DocumentRecord::new("a.pdf", "Invoice".to_string(), "An invoice.".to_string()),
        DocumentRecord::new("b.docx", "other".to_string(), "No summary available.".to_string()),
    ];
    let json = serde_json::to_value(&records).unwrap();

    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["title"], "a.pdf");
    assert_eq!(json[1]["category"], "other");
}

/// DELETE /delete/:id always returns the fixed message.
#[test]
fn test_delete_response_shape() {
    let body = serde_json::json!({ "message": "Document deleted successfully" });
    assert_eq!(body["message"], "Document deleted successfully");
    assert_eq!(body.as_object().unwrap().len(), 1);
}

/// Failures carry a human-readable message under "error".
#[test]
fn test_error_body_shape() {
    let err = docshelf_core::Error::EmptyFile;
    let body = serde_json::json!({ "error": err.to_string() });
    assert_eq!(body["error"], "The file is empty");
}

/// Upload-time timestamps use the fixed display pattern, e.g.
/// "2026-08-29 14:03:07".
#[test]
fn test_upload_date_format() {
    let record = DocumentRecord::new("a.pdf", "other".to_string(), "x".to_string());
    chrono::NaiveDateTime::parse_from_str(
        &record.upload_date,
        docshelf_core::types::UPLOAD_DATE_FORMAT,
    )
    .unwrap();
}

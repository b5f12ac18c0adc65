//! Integration tests for the REST record store against a mock backend

use mailbook::adapters::store::rest::RestStore;
use mailbook::adapters::store::traits::RecordStore;
use mailbook::config::{secret_string, StoreConfig};
use mailbook::domain::{MailbookError, NewEmailRecord, StoreError};

fn store_for(server: &mockito::Server) -> RestStore {
    let config = StoreConfig {
        base_url: server.url(),
        api_key: secret_string("test-key".to_string()),
        table: "email_records".to_string(),
        bucket: "pdfs".to_string(),
        timeout_seconds: 5,
        max_attachment_mb: 40,
    };
    RestStore::new(&config).unwrap()
}

fn record_json(id: &str, subject: &str, created_at: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "from_user": "registrar@college.edu",
            "to_user": "dean@college.edu, hod@college.edu",
            "subject": "{subject}",
            "content": "body",
            "subject_hindi": "",
            "content_hindi": null,
            "pdf_filename": "a.pdf",
            "sent_date": "2024-03-05",
            "created_at": "{created_at}"
        }}"#
    )
}

#[tokio::test]
async fn test_list_records_normalizes_wire_rows() {
    let mut server = mockito::Server::new_async().await;
    let body = format!(
        "[{},{}]",
        record_json("1", "older", "2024-03-01T10:00:00Z"),
        record_json("2", "newer", "2024-03-05T10:00:00Z")
    );
    let mock = server
        .mock("GET", "/rest/v1/email_records")
        .match_query(mockito::Matcher::Any)
        .match_header("apikey", "test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let store = store_for(&server);
    let records = store.list_records().await.unwrap();
    mock.assert_async().await;

    assert_eq!(records.len(), 2);
    // Newest created_at first regardless of response order
    assert_eq!(records[0].subject, "newer");
    // Comma-joined recipients split at the adapter edge
    assert_eq!(
        records[1].recipients,
        vec!["dean@college.edu", "hod@college.edu"]
    );
    // Empty translation strings become None
    assert!(records[0].subject_hindi.is_none());
    assert_eq!(records[0].attachments, vec!["a.pdf"]);
}

#[tokio::test]
async fn test_list_records_accepts_numeric_ids() {
    let mut server = mockito::Server::new_async().await;
    let body = record_json("1", "x", "2024-03-01T10:00:00Z").replace("\"id\": \"1\"", "\"id\": 42");
    server
        .mock("GET", "/rest/v1/email_records")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{body}]"))
        .create_async()
        .await;

    let store = store_for(&server);
    let records = store.list_records().await.unwrap();
    assert_eq!(records[0].id.as_str(), "42");
}

#[tokio::test]
async fn test_list_records_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/rest/v1/email_records")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let store = store_for(&server);
    let err = store.list_records().await.unwrap_err();
    match err {
        MailbookError::Store(StoreError::ServerError { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_record_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/v1/email_records")
        .match_header("prefer", "return=representation")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{}]",
            record_json("9", "created", "2024-03-05T10:00:00Z")
        ))
        .create_async()
        .await;

    let store = store_for(&server);
    let new_record = NewEmailRecord {
        from: "registrar@college.edu".to_string(),
        recipients: vec!["dean@college.edu".to_string()],
        subject: "created".to_string(),
        content: "body".to_string(),
        subject_hindi: None,
        content_hindi: None,
        subject_marathi: None,
        content_marathi: None,
        attachments: vec![],
        sent_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    };
    let record = store.create_record(&new_record).await.unwrap();
    mock.assert_async().await;
    assert_eq!(record.id.as_str(), "9");
    assert_eq!(record.subject, "created");
}

#[tokio::test]
async fn test_download_attachment_success() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/storage/v1/object/pdfs/a.pdf")
        .with_status(200)
        .with_body([0x25, 0x50, 0x44, 0x46])
        .create_async()
        .await;

    let store = store_for(&server);
    let bytes = store.download_attachment("a.pdf").await.unwrap();
    assert_eq!(bytes, vec![0x25, 0x50, 0x44, 0x46]);
}

#[tokio::test]
async fn test_download_missing_attachment_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/storage/v1/object/pdfs/missing.pdf")
        .with_status(404)
        .create_async()
        .await;

    let store = store_for(&server);
    let err = store.download_attachment("missing.pdf").await.unwrap_err();
    match err {
        MailbookError::Store(e) => {
            assert!(matches!(e, StoreError::AttachmentNotFound(_)));
            assert_eq!(e.category(), "AttachmentNotFound");
        }
        other => panic!("expected store error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upload_attachment_returns_generated_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", mockito::Matcher::Regex(r"^/storage/v1/object/pdfs/[0-9a-f]{32}\.pdf$".to_string()))
        .match_header("content-type", "application/pdf")
        .with_status(200)
        .with_body(r#"{"Key": "pdfs/whatever.pdf"}"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let key = store
        .upload_attachment("notice.pdf", b"%PDF".to_vec())
        .await
        .unwrap();
    mock.assert_async().await;
    assert!(key.ends_with(".pdf"));
    assert_eq!(key.len(), 32 + 4);
}

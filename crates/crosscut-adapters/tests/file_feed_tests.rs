use std::path::PathBuf;

use crosscut_adapters::{FileAuditFeed, FileProductCatalog};
use crosscut_core::ports::{AuditFeed, ProductCatalog};
use crosscut_domain::AuditAction;

fn temp_path(name: &str) -> PathBuf {
    let unique = format!("crosscut-{}-{}-{}",
                         name,
                         std::process::id(),
                         chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default());
    std::env::temp_dir().join(unique)
}

#[tokio::test]
async fn missing_audit_log_is_empty_feed() {
    let feed = FileAuditFeed::new(temp_path("missing"));
    let entries = feed.fetch_entries().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn reads_audit_log_written_by_bpo() {
    let path = temp_path("valid");
    // Formato exacto del BPO: array JSON con indentación
    let body = r#"[
  {
    "timestamp": "2025-09-25T10:28:37.720219775Z",
    "workflow_id": "wf-1727264917",
    "event": "schematic.released",
    "action": "workflow_started",
    "status": "success",
    "details": { "product_name": "ROUTER-100", "revision": "C" }
  },
  {
    "timestamp": "2025-09-25T10:28:37.805635497Z",
    "workflow_id": "wf-1727264917",
    "event": "schematic.released",
    "action": "workflow_completed",
    "status": "success",
    "details": { "final_document_url": "gcs://fake-bucket/doc.docx" }
  }
]"#;
    tokio::fs::write(&path, body).await.unwrap();

    let feed = FileAuditFeed::new(&path);
    let entries = feed.fetch_entries().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, AuditAction::WorkflowStarted);
    assert_eq!(entries[1].detail_str("final_document_url"), Some("gcs://fake-bucket/doc.docx"));

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn corrupt_audit_log_degrades_to_empty() {
    let path = temp_path("corrupt");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let feed = FileAuditFeed::new(&path);
    let entries = feed.fetch_entries().await.unwrap();
    assert!(entries.is_empty(), "log corrupto debe tratarse como vacío");

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn empty_audit_log_is_empty_feed() {
    let path = temp_path("empty");
    tokio::fs::write(&path, b"").await.unwrap();

    let feed = FileAuditFeed::new(&path);
    assert!(feed.fetch_entries().await.unwrap().is_empty());

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn reads_plm_data_file() {
    let path = temp_path("plm");
    let body = r#"{
  "products": [
    {
      "name": "ROUTER-100",
      "voltage": "12V",
      "description": "High-performance network router",
      "revision": "C",
      "components": [
        { "name": "PowerTest", "voltage": "12V", "test_type": "power_supply_validation" }
      ]
    },
    {
      "name": "SWITCH-200",
      "voltage": "24V",
      "description": "Managed network switch",
      "revision": "B",
      "components": [
        { "name": "PowerTest", "voltage": "24V", "test_type": "power_supply_validation" }
      ]
    }
  ]
}"#;
    tokio::fs::write(&path, body).await.unwrap();

    let catalog = FileProductCatalog::new(&path);
    let products = catalog.fetch_products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "ROUTER-100");
    assert_eq!(products[1].voltage, "24V");

    let _ = tokio::fs::remove_file(&path).await;
}

#[tokio::test]
async fn missing_plm_data_is_upstream_error() {
    let catalog = FileProductCatalog::new(temp_path("plm-missing"));
    assert!(catalog.fetch_products().await.is_err());
}

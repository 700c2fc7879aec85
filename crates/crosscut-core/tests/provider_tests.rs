use chrono::{TimeZone, Utc};
use crosscut_adapters::{FailingTrigger, InMemoryAuditFeed, StaticProductCatalog, StaticTrigger};
use crosscut_core::{AdminProvider, ProviderError, Record, Resource};
use crosscut_domain::{AuditAction, AuditEntry, AuditStatus, Product, ProductComponent, TriggerAck,
                      TriggerRequest, WorkflowStatus};
use serde_json::json;

fn entry(workflow_id: &str, action: AuditAction, status: AuditStatus, details: Option<serde_json::Value>) -> AuditEntry {
    AuditEntry {
        timestamp: Utc.with_ymd_and_hms(2025, 9, 25, 10, 28, 37).unwrap(),
        workflow_id: workflow_id.to_string(),
        event: "schematic.released".to_string(),
        action,
        status,
        details,
        error: None,
    }
}

fn sample_entries() -> Vec<AuditEntry> {
    vec![entry("wf1",
               AuditAction::WorkflowStarted,
               AuditStatus::Success,
               Some(json!({"product_name": "ROUTER-100", "revision": "C"}))),
         entry("wf1", AuditAction::TemplatePlanGenerated, AuditStatus::Success, None),
         entry("wf1",
               AuditAction::WorkflowCompleted,
               AuditStatus::Success,
               Some(json!({"final_document_url": "gcs://fake-bucket/doc.docx"}))),
         entry("wf2",
               AuditAction::WorkflowStarted,
               AuditStatus::Success,
               Some(json!({"product_name": "SWITCH-200", "revision": "B"})))]
}

fn sample_products() -> Vec<Product> {
    vec![Product { name: "ROUTER-100".to_string(),
                   voltage: "12V".to_string(),
                   description: "High-performance network router".to_string(),
                   revision: "C".to_string(),
                   components: vec![ProductComponent { name: "PowerTest".to_string(),
                                                       voltage: "12V".to_string(),
                                                       test_type: "power_supply_validation".to_string() }] }]
}

fn provider_with(entries: Vec<AuditEntry>) -> AdminProvider<InMemoryAuditFeed, StaticProductCatalog, StaticTrigger> {
    let ack = TriggerAck { status: "success".to_string(),
                           workflow_id: "wf-new".to_string(),
                           message: "Workflow completed successfully".to_string(),
                           document_url: Some("gcs://fake-bucket/new.docx".to_string()) };
    AdminProvider::new(InMemoryAuditFeed::new(entries),
                       StaticProductCatalog::new(sample_products()),
                       StaticTrigger::new(ack))
}

#[tokio::test]
async fn list_workflows_runs_projection() {
    let provider = provider_with(sample_entries());
    let result = provider.list(Resource::Workflows).await.unwrap();
    assert_eq!(result.total, 2);

    let wf1 = result.items.iter().find(|r| r.id() == "wf1").unwrap();
    match wf1 {
        Record::Workflow(v) => {
            assert_eq!(v.status, WorkflowStatus::Completed);
            assert_eq!(v.document_url.as_deref(), Some("gcs://fake-bucket/doc.docx"));
        }
        other => panic!("expected workflow record, got {:?}", other),
    }
}

#[tokio::test]
async fn list_audit_synthesizes_positional_ids() {
    let provider = provider_with(sample_entries());
    let result = provider.list(Resource::Audit).await.unwrap();
    assert_eq!(result.total, 4);
    assert_eq!(result.items[0].id(), "wf1-0");
    assert_eq!(result.items[2].id(), "wf1-2");
    assert_eq!(result.items[3].id(), "wf2-3");
}

#[tokio::test]
async fn list_products_synthesizes_positional_ids() {
    let provider = provider_with(Vec::new());
    let result = provider.list(Resource::Products).await.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].id(), "product-0");
}

#[tokio::test]
async fn get_one_unknown_id_is_not_found() {
    let provider = provider_with(sample_entries());
    let err = provider.get_one(Resource::Workflows, "wf-unknown").await.unwrap_err();
    match err {
        ProviderError::NotFound { resource, id } => {
            assert_eq!(resource, Resource::Workflows);
            assert_eq!(id, "wf-unknown");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn get_many_preserves_requested_order() {
    let provider = provider_with(sample_entries());
    let ids = vec!["wf2".to_string(), "wf1".to_string()];
    let records = provider.get_many(Resource::Workflows, &ids).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id(), "wf2");
    assert_eq!(records[1].id(), "wf1");
}

#[tokio::test]
async fn get_many_fails_entirely_on_missing_id() {
    let provider = provider_with(sample_entries());
    let ids = vec!["wf1".to_string(), "wf-missing".to_string()];
    let err = provider.get_many(Resource::Workflows, &ids).await.unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { .. }), "sin resultados parciales: {:?}", err);
}

#[tokio::test]
async fn create_workflow_returns_ack_stub() {
    let provider = provider_with(Vec::new());
    let request = TriggerRequest { trigger_event: "schematic.released".to_string(),
                                   payload: json!({"product_name": "ROUTER-100", "revision": "C"}) };
    let view = provider.create(Resource::Workflows, request).await.unwrap();
    assert_eq!(view.id, "wf-new");
    assert_eq!(view.workflow_id, "wf-new");
    assert_eq!(view.status, WorkflowStatus::Completed);
    assert_eq!(view.product_name.as_deref(), Some("ROUTER-100"));
    assert_eq!(view.revision.as_deref(), Some("C"));
    assert_eq!(view.document_url.as_deref(), Some("gcs://fake-bucket/new.docx"));
}

#[tokio::test]
async fn create_on_other_resources_is_unsupported() {
    let provider = provider_with(Vec::new());
    let request = TriggerRequest { trigger_event: "schematic.released".to_string(),
                                   payload: json!({}) };
    let err = provider.create(Resource::Products, request).await.unwrap_err();
    assert!(matches!(err, ProviderError::Unsupported { resource: Resource::Products, .. }));
}

#[tokio::test]
async fn mutations_are_always_unsupported() {
    let provider = provider_with(Vec::new());
    assert!(matches!(provider.update(Resource::Workflows), Err(ProviderError::Unsupported { .. })));
    assert!(matches!(provider.update_many(Resource::Audit), Err(ProviderError::Unsupported { .. })));
    assert!(matches!(provider.delete(Resource::Products), Err(ProviderError::Unsupported { .. })));
    assert!(matches!(provider.delete_many(Resource::Workflows), Err(ProviderError::Unsupported { .. })));
}

#[tokio::test]
async fn trigger_failure_propagates_as_upstream() {
    let provider = AdminProvider::new(InMemoryAuditFeed::new(Vec::new()),
                                      StaticProductCatalog::new(Vec::new()),
                                      FailingTrigger::failed("connection refused"));
    let request = TriggerRequest { trigger_event: "schematic.released".to_string(),
                                   payload: json!({"product_name": "X"}) };
    let err = provider.create(Resource::Workflows, request).await.unwrap_err();
    match err {
        ProviderError::Upstream(msg) => assert!(msg.contains("connection refused")),
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn canceled_trigger_surfaces_as_canceled() {
    let provider = AdminProvider::new(InMemoryAuditFeed::new(Vec::new()),
                                      StaticProductCatalog::new(Vec::new()),
                                      FailingTrigger::canceled());
    let request = TriggerRequest { trigger_event: "schematic.released".to_string(),
                                   payload: json!({}) };
    let err = provider.create(Resource::Workflows, request).await.unwrap_err();
    assert!(matches!(err, ProviderError::Canceled));
}

#[tokio::test]
async fn system_metrics_counts_projected_views() {
    let mut entries = sample_entries();
    entries.push(entry("wf3", AuditAction::WorkflowStarted, AuditStatus::Success, None));
    entries.push(entry("wf3", AuditAction::WorkflowFailed, AuditStatus::Failed, None));
    let provider = provider_with(entries);

    let metrics = provider.system_metrics().await.unwrap();
    assert_eq!(metrics.total_workflows, 3);
    assert_eq!(metrics.successful_workflows, 1);
    assert_eq!(metrics.failed_workflows, 1);
    assert_eq!(metrics.running_workflows(), 1);
}

#[test]
fn resource_parses_known_names_only() {
    assert_eq!("workflows".parse::<Resource>().unwrap(), Resource::Workflows);
    assert_eq!("audit".parse::<Resource>().unwrap(), Resource::Audit);
    assert_eq!("products".parse::<Resource>().unwrap(), Resource::Products);
    assert!(matches!("invoices".parse::<Resource>(), Err(ProviderError::UnknownResource(_))));
}

//! Proyección del audit log: fold lineal de eventos a vistas por workflow.
//!
//! Rol en el sistema:
//! - Consume el audit log en orden de entrada (sin re-ordenar) y produce un
//!   mapa `workflow_id -> WorkflowView`.
//! - Es una función pura: mismo slice de entradas, mismo mapa resultante
//!   (sin reloj, sin aleatoriedad, O(n), cada evento se visita una vez).
//! - Nunca falla: un evento malformado degrada a una vista ausente o
//!   desactualizada, no aborta el fold.
use crosscut_domain::{AuditAction, AuditEntry, AuditStatus, WorkflowStatus, WorkflowView};
use indexmap::IndexMap;

/// Mensaje de una vista recién iniciada.
pub const MSG_IN_PROGRESS: &str = "Workflow in progress";
/// Mensaje tras un terminal exitoso.
pub const MSG_COMPLETED: &str = "Workflow completed successfully";
/// Mensaje tras un terminal fallido.
pub const MSG_FAILED: &str = "Workflow failed";

/// Reduce el audit log a las vistas actuales de workflow.
///
/// Reglas por acción:
/// - `workflow_started`: inserta una vista en `running`. Un start duplicado
///   para el mismo id la sobrescribe (semántica de restart).
/// - `workflow_completed` / `workflow_failed`: muta la vista existente; si
///   no hay start previo el evento se descarta en silencio (terminal
///   huérfano).
/// - Cualquier otra acción: no-op sobre las vistas (visible sólo en el audit
///   log crudo).
pub fn project(entries: &[AuditEntry]) -> IndexMap<String, WorkflowView> {
    let mut views: IndexMap<String, WorkflowView> = IndexMap::new();
    for entry in entries {
        apply(&mut views, entry);
    }
    views
}

fn apply(views: &mut IndexMap<String, WorkflowView>, entry: &AuditEntry) {
    match entry.action {
        AuditAction::WorkflowStarted => {
            let view = WorkflowView {
                id: entry.workflow_id.clone(),
                workflow_id: entry.workflow_id.clone(),
                status: WorkflowStatus::Running,
                message: MSG_IN_PROGRESS.to_string(),
                created_at: entry.timestamp,
                product_name: entry.detail_str("product_name").map(str::to_string),
                revision: entry.detail_str("revision").map(str::to_string),
                document_url: None,
            };
            views.insert(entry.workflow_id.clone(), view);
        }
        AuditAction::WorkflowCompleted | AuditAction::WorkflowFailed => {
            // Terminal sin start previo: descartado, no puede representarse.
            if let Some(view) = views.get_mut(&entry.workflow_id) {
                if entry.status == AuditStatus::Success {
                    view.status = WorkflowStatus::Completed;
                    view.message = MSG_COMPLETED.to_string();
                } else {
                    view.status = WorkflowStatus::Failed;
                    view.message = MSG_FAILED.to_string();
                }
                if let Some(url) = entry.detail_str("final_document_url") {
                    view.document_url = Some(url.to_string());
                }
            }
        }
        _ => {}
    }
}

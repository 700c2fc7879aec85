//! Vista materializada del estado actual de un workflow.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado de ciclo de vida derivado del audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Running,
    Completed,
    Failed,
}

/// Registro derivado para las pantallas de lista/detalle.
///
/// Sólo la proyección crea y muta estas vistas; los consumidores reciben
/// snapshots de lectura. `id` y `workflow_id` son siempre iguales (react-admin
/// exige un campo `id` propio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowView {
    pub id: String,
    pub workflow_id: String,
    pub status: WorkflowStatus,
    pub message: String,
    /// Timestamp del evento `workflow_started`.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Presente sólo cuando un evento terminal trae `final_document_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

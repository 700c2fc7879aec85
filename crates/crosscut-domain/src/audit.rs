//! Entradas del audit log emitidas por el servicio BPO.
//!
//! Rol en el sistema:
//! - El BPO escribe una entrada por cada paso del ciclo de vida de un
//!   workflow; el feed las entrega en orden de emisión.
//! - La proyección (`crosscut-core`) las consume en ese orden para derivar
//!   el estado actual de cada workflow.
//! - Los nombres de campo JSON son el contrato observable del BPO y no
//!   deben cambiar.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acción de ciclo de vida registrada por el BPO.
///
/// El conjunto está abierto: acciones desconocidas se conservan en
/// `Other` para que la proyección las trate como no-op en lugar de
/// fallar la deserialización.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    WorkflowStarted,
    TemplatePlanGenerated,
    PlmConsultation,
    DocgenCommand,
    WorkflowCompleted,
    WorkflowFailed,
    Other(String),
}

impl AuditAction {
    pub fn as_str(&self) -> &str {
        match self {
            AuditAction::WorkflowStarted => "workflow_started",
            AuditAction::TemplatePlanGenerated => "template_plan_generated",
            AuditAction::PlmConsultation => "plm_consultation",
            AuditAction::DocgenCommand => "docgen_command",
            AuditAction::WorkflowCompleted => "workflow_completed",
            AuditAction::WorkflowFailed => "workflow_failed",
            AuditAction::Other(s) => s.as_str(),
        }
    }

    /// `workflow_completed` o `workflow_failed`: cierran el workflow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AuditAction::WorkflowCompleted | AuditAction::WorkflowFailed)
    }
}

impl From<String> for AuditAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "workflow_started" => AuditAction::WorkflowStarted,
            "template_plan_generated" => AuditAction::TemplatePlanGenerated,
            "plm_consultation" => AuditAction::PlmConsultation,
            "docgen_command" => AuditAction::DocgenCommand,
            "workflow_completed" => AuditAction::WorkflowCompleted,
            "workflow_failed" => AuditAction::WorkflowFailed,
            _ => AuditAction::Other(s),
        }
    }
}

impl From<AuditAction> for String {
    fn from(a: AuditAction) -> Self {
        a.as_str().to_string()
    }
}

/// Resultado del paso registrado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Success,
    Failed,
}

/// Una entrada inmutable del audit log.
///
/// Invariante (garantizada por el BPO, no re-verificada aquí): dentro de un
/// mismo `workflow_id` los timestamps son no-decrecientes y exactamente un
/// `workflow_started` precede a cualquier evento terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub workflow_id: String,
    /// Evento de dominio que disparó el workflow (ej. `schematic.released`).
    pub event: String,
    pub action: AuditAction,
    pub status: AuditStatus,
    /// Campos específicos de la acción; el esquema varía por `action`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Lee un campo string de `details`, si existe.
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get(key))
            .and_then(|v| v.as_str())
    }
}

//! Contrato del endpoint de disparo de workflows del BPO
//! (`POST /v1/execute-workflow`) y del health check.
use serde::{Deserialize, Serialize};

/// Petición de disparo. `payload` es un mapa libre definido por el
/// `trigger_event` (ej. `schematic.released` espera `product_name` y
/// `revision`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerRequest {
    pub trigger_event: String,
    pub payload: serde_json::Value,
}

impl TriggerRequest {
    /// Lee un campo string del payload, si existe.
    pub fn payload_str(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(|v| v.as_str())
    }
}

/// Acuse inicial del backend de ejecución.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerAck {
    pub status: String,
    pub workflow_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

/// Respuesta de `GET /health` de los servicios del ecosistema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub service: String,
    pub version: String,
}

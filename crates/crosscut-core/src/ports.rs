//! Ports hacia los colaboradores externos.
//!
//! El core trata cada llamada como síncrona y completa: el feed entrega el
//! audit log entero por llamada (sin streaming) y el disparo de workflows es
//! una sola llamada saliente sin política de reintentos (un segundo disparo
//! produce un segundo `workflow_id`, no un error).
use async_trait::async_trait;
use crosscut_domain::{AuditEntry, Product, TriggerAck, TriggerRequest};

use crate::errors::UpstreamError;

/// Fuente del audit log, en orden de emisión.
#[async_trait]
pub trait AuditFeed: Send + Sync {
    /// Snapshot completo y ordenado del audit log.
    async fn fetch_entries(&self) -> Result<Vec<AuditEntry>, UpstreamError>;
}

/// Catálogo de productos del PLM.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, UpstreamError>;
}

/// Disparo de un workflow en el backend de ejecución.
#[async_trait]
pub trait WorkflowTrigger: Send + Sync {
    /// Una sola llamada; el error se propaga al caller sin reintentar.
    async fn trigger(&self, request: &TriggerRequest) -> Result<TriggerAck, UpstreamError>;
}

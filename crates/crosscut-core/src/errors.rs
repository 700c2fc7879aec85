//! Taxonomía de errores del core.
//!
//! La proyección nunca falla (resuelve ambigüedad descartando o
//! sobrescribiendo); los errores de este módulo salen únicamente del facade
//! y de los ports.
use thiserror::Error;

use crate::provider::Resource;

/// Falla de una llamada saliente (feed, catálogo o backend de ejecución).
/// Se propaga sin reintentos ni supresión.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream call failed: {0}")]
    Failed(String),
    #[error("call canceled by caller")]
    Canceled,
}

/// Operaciones del contrato uniforme, para los mensajes de Unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    UpdateMany,
    DeleteMany,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::UpdateMany => "update_many",
            Operation::DeleteMany => "delete_many",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores del facade de recursos.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// `get_one`/`get_many` contra un id inexistente.
    #[error("{resource}: id not found: {id}")]
    NotFound { resource: Resource, id: String },
    /// Mutación fuera de `create(workflows)`: el sistema es append-only.
    #[error("operation {operation} not supported for resource {resource}")]
    Unsupported { resource: Resource, operation: Operation },
    /// Nombre de colección desconocido (rechazado al parsear).
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("canceled")]
    Canceled,
}

impl From<UpstreamError> for ProviderError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Failed(msg) => ProviderError::Upstream(msg),
            UpstreamError::Canceled => ProviderError::Canceled,
        }
    }
}

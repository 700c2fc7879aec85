//! Lectores de archivo: el audit log del BPO y los datos del PLM.
//!
//! El BPO reescribe `audit-log.json` entero (array JSON con indentación) en
//! cada paso; el PLM carga `plm-data.json` al arrancar. Ambos lectores
//! toman un snapshot completo por llamada, igual que los servicios
//! originales.
use std::path::PathBuf;

use async_trait::async_trait;
use crosscut_core::errors::UpstreamError;
use crosscut_core::ports::{AuditFeed, ProductCatalog};
use crosscut_domain::{AuditEntry, Product};
use serde::Deserialize;

/// Feed de auditoría sobre el archivo que escribe el BPO.
#[derive(Debug, Clone)]
pub struct FileAuditFeed {
    path: PathBuf,
}

impl FileAuditFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AuditFeed for FileAuditFeed {
    async fn fetch_entries(&self) -> Result<Vec<AuditEntry>, UpstreamError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            // Sin archivo aún = sin workflows ejecutados
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(UpstreamError::Failed(format!("read {}: {}", self.path.display(), e))),
        };
        if bytes.is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Mismo tratamiento que el BPO: log corrupto se descarta
                log::warn!("audit log corrupto en {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }
}

/// Forma del archivo de datos del PLM.
#[derive(Debug, Deserialize)]
struct PlmData {
    products: Vec<Product>,
}

/// Catálogo de productos sobre `plm-data.json`.
#[derive(Debug, Clone)]
pub struct FileProductCatalog {
    path: PathBuf,
}

impl FileProductCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductCatalog for FileProductCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, UpstreamError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| UpstreamError::Failed(format!("read {}: {}", self.path.display(), e)))?;
        let data: PlmData = serde_json::from_slice(&bytes)
            .map_err(|e| UpstreamError::Failed(format!("parse {}: {}", self.path.display(), e)))?;
        Ok(data.products)
    }
}

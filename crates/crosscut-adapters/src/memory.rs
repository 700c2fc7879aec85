//! Dobles en memoria de los ports, para tests y demos.
use async_trait::async_trait;
use crosscut_core::errors::UpstreamError;
use crosscut_core::ports::{AuditFeed, ProductCatalog, WorkflowTrigger};
use crosscut_domain::{AuditEntry, Product, TriggerAck, TriggerRequest};

/// Feed de auditoría sobre un Vec fijo (snapshot inmutable).
#[derive(Debug, Default)]
pub struct InMemoryAuditFeed {
    entries: Vec<AuditEntry>,
}

impl InMemoryAuditFeed {
    pub fn new(entries: Vec<AuditEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl AuditFeed for InMemoryAuditFeed {
    async fn fetch_entries(&self) -> Result<Vec<AuditEntry>, UpstreamError> {
        Ok(self.entries.clone())
    }
}

/// Catálogo fijo de productos.
#[derive(Debug, Default)]
pub struct StaticProductCatalog {
    products: Vec<Product>,
}

impl StaticProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for StaticProductCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, UpstreamError> {
        Ok(self.products.clone())
    }
}

/// Trigger que responde siempre el mismo acuse.
#[derive(Debug)]
pub struct StaticTrigger {
    ack: TriggerAck,
}

impl StaticTrigger {
    pub fn new(ack: TriggerAck) -> Self {
        Self { ack }
    }
}

#[async_trait]
impl WorkflowTrigger for StaticTrigger {
    async fn trigger(&self, _request: &TriggerRequest) -> Result<TriggerAck, UpstreamError> {
        Ok(self.ack.clone())
    }
}

/// Trigger que falla siempre, con el error indicado.
#[derive(Debug)]
pub struct FailingTrigger {
    message: Option<String>, // None = cancelación
}

impl FailingTrigger {
    pub fn failed(message: &str) -> Self {
        Self { message: Some(message.to_string()) }
    }

    pub fn canceled() -> Self {
        Self { message: None }
    }
}

#[async_trait]
impl WorkflowTrigger for FailingTrigger {
    async fn trigger(&self, _request: &TriggerRequest) -> Result<TriggerAck, UpstreamError> {
        match &self.message {
            Some(msg) => Err(UpstreamError::Failed(msg.clone())),
            None => Err(UpstreamError::Canceled),
        }
    }
}

//! Registros que devuelve el facade, con su identificador por colección.
//!
//! Las vistas de workflow traen id propio (= `workflow_id`); las entradas de
//! auditoría y los productos reciben un id sintetizado por posición, estable
//! sólo dentro de un mismo snapshot del feed.
use crosscut_domain::{AuditEntry, Product, WorkflowView};
use serde::Serialize;

/// Entrada de auditoría con id sintetizado `{workflow_id}-{index}`.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub id: String,
    #[serde(flatten)]
    pub entry: AuditEntry,
}

impl AuditRecord {
    pub fn new(index: usize, entry: AuditEntry) -> Self {
        Self { id: format!("{}-{}", entry.workflow_id, index), entry }
    }
}

/// Producto con id sintetizado `product-{index}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub id: String,
    #[serde(flatten)]
    pub product: Product,
}

impl ProductRecord {
    pub fn new(index: usize, product: Product) -> Self {
        Self { id: format!("product-{}", index), product }
    }
}

/// Un elemento de cualquiera de las tres colecciones.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    Workflow(WorkflowView),
    Audit(AuditRecord),
    Product(ProductRecord),
}

impl Record {
    pub fn id(&self) -> &str {
        match self {
            Record::Workflow(v) => &v.id,
            Record::Audit(a) => &a.id,
            Record::Product(p) => &p.id,
        }
    }
}

/// Resultado de `list`: items más el total del snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    pub items: Vec<Record>,
    pub total: usize,
}

impl ListResult {
    pub fn new(items: Vec<Record>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}

//! Facade de acceso a recursos: contrato uniforme list/get/create sobre las
//! colecciones `workflows | audit | products`.
//!
//! Cada llamada trabaja sobre un snapshot fresco del feed (sin caché entre
//! llamadas): `get_one`/`get_many` son consistentes con `list` a costa de
//! recomputar la proyección, aceptable para el tamaño esperado del audit
//! log. No hay estado mutable compartido entre llamadas; cancelar (drop) el
//! future aborta el IO en vuelo.
mod records;
mod resource;

pub use records::{AuditRecord, ListResult, ProductRecord, Record};
pub use resource::Resource;

use chrono::Utc;
use crosscut_domain::{TriggerRequest, WorkflowStatus, WorkflowView};
use futures::future::try_join_all;

use crate::errors::{Operation, ProviderError};
use crate::metrics::SystemMetrics;
use crate::ports::{AuditFeed, ProductCatalog, WorkflowTrigger};
use crate::projection::project;

/// Facade genérico sobre los tres ports, al estilo del resto de motores del
/// workspace: los colaboradores se inyectan por tipo, no por configuración
/// global.
#[derive(Debug)]
pub struct AdminProvider<F, C, T>
    where F: AuditFeed,
          C: ProductCatalog,
          T: WorkflowTrigger
{
    feed: F,
    catalog: C,
    trigger: T,
}

impl<F, C, T> AdminProvider<F, C, T>
    where F: AuditFeed,
          C: ProductCatalog,
          T: WorkflowTrigger
{
    pub fn new(feed: F, catalog: C, trigger: T) -> Self {
        Self { feed, catalog, trigger }
    }

    /// Lista una colección completa.
    ///
    /// Para `workflows` corre la proyección sobre el feed entero; para
    /// `audit` devuelve el feed crudo con ids sintetizados; para `products`
    /// el catálogo con ids sintetizados. Filtrado/orden/paginación quedan
    /// del lado del caller.
    pub async fn list(&self, resource: Resource) -> Result<ListResult, ProviderError> {
        let items = match resource {
            Resource::Workflows => {
                let entries = self.feed.fetch_entries().await?;
                project(&entries).into_values().map(Record::Workflow).collect()
            }
            Resource::Audit => {
                let entries = self.feed.fetch_entries().await?;
                entries.into_iter()
                       .enumerate()
                       .map(|(i, e)| Record::Audit(AuditRecord::new(i, e)))
                       .collect()
            }
            Resource::Products => {
                let products = self.catalog.fetch_products().await?;
                products.into_iter()
                        .enumerate()
                        .map(|(i, p)| Record::Product(ProductRecord::new(i, p)))
                        .collect()
            }
        };
        Ok(ListResult::new(items))
    }

    /// Busca un elemento por id: `list` + barrido lineal.
    pub async fn get_one(&self, resource: Resource, id: &str) -> Result<Record, ProviderError> {
        let result = self.list(resource).await?;
        result.items
              .into_iter()
              .find(|r| r.id() == id)
              .ok_or_else(|| ProviderError::NotFound { resource, id: id.to_string() })
    }

    /// Busca varios ids y devuelve los resultados en el orden pedido.
    ///
    /// Los `get_one` corren concurrentes (snapshots independientes, sólo
    /// lectura); cualquier id ausente falla la llamada completa, sin
    /// resultados parciales.
    pub async fn get_many(&self, resource: Resource, ids: &[String]) -> Result<Vec<Record>, ProviderError> {
        try_join_all(ids.iter().map(|id| self.get_one(resource, id))).await
    }

    /// Dispara un workflow nuevo. Sólo `workflows` soporta `create`.
    ///
    /// Devuelve un stub de vista construido con el acuse del backend:
    /// `id = ack.workflow_id`, `created_at = ahora`, producto/revisión
    /// copiados del payload de la petición. La vista real aparecerá en
    /// `list(workflows)` cuando el backend registre `workflow_started`.
    pub async fn create(&self, resource: Resource, request: TriggerRequest) -> Result<WorkflowView, ProviderError> {
        if resource != Resource::Workflows {
            return Err(ProviderError::Unsupported { resource, operation: Operation::Create });
        }

        let ack = self.trigger.trigger(&request).await?;
        let status = match ack.status.as_str() {
            "success" | "completed" => WorkflowStatus::Completed,
            "failed" => WorkflowStatus::Failed,
            _ => WorkflowStatus::Running,
        };

        Ok(WorkflowView {
            id: ack.workflow_id.clone(),
            workflow_id: ack.workflow_id,
            status,
            message: ack.message,
            created_at: Utc::now(),
            product_name: request.payload_str("product_name").map(str::to_string),
            revision: request.payload_str("revision").map(str::to_string),
            document_url: ack.document_url,
        })
    }

    /// El sistema es append-only: toda actualización se rechaza.
    pub fn update(&self, resource: Resource) -> Result<Record, ProviderError> {
        Err(ProviderError::Unsupported { resource, operation: Operation::Update })
    }

    pub fn update_many(&self, resource: Resource) -> Result<Vec<Record>, ProviderError> {
        Err(ProviderError::Unsupported { resource, operation: Operation::UpdateMany })
    }

    /// La proyección nunca borra vistas; la retención es asunto del feed.
    pub fn delete(&self, resource: Resource) -> Result<Record, ProviderError> {
        Err(ProviderError::Unsupported { resource, operation: Operation::Delete })
    }

    pub fn delete_many(&self, resource: Resource) -> Result<Vec<Record>, ProviderError> {
        Err(ProviderError::Unsupported { resource, operation: Operation::DeleteMany })
    }

    /// Conteos del dashboard: proyección fresca + una pasada de conteo.
    pub async fn system_metrics(&self) -> Result<SystemMetrics, ProviderError> {
        let entries = self.feed.fetch_entries().await?;
        let views = project(&entries);
        Ok(SystemMetrics::from_views(views.values()))
    }
}

//! crosscut-core: proyección del audit log y facade de recursos.
//!
//! Este crate contiene el núcleo sin IO del panel de administración:
//! - `projection`: fold determinista del audit log a vistas por workflow.
//! - `ports`: contratos hacia los colaboradores externos (feed de auditoría,
//!   catálogo PLM, backend de ejecución).
//! - `provider`: contrato uniforme list/get/create sobre las colecciones
//!   `workflows | audit | products`.
//! - `metrics`: agregados para el dashboard.
//!
//! El core no abre conexiones ni lee disco; todo IO entra por los ports
//! (implementaciones concretas en `crosscut-adapters`).
pub mod errors;
pub mod metrics;
pub mod ports;
pub mod projection;
pub mod provider;

pub use errors::{Operation, ProviderError, UpstreamError};
pub use metrics::SystemMetrics;
pub use ports::{AuditFeed, ProductCatalog, WorkflowTrigger};
pub use projection::project;
pub use provider::{AdminProvider, AuditRecord, ListResult, ProductRecord, Record, Resource};

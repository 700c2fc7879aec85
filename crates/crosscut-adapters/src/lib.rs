//! crosscut-adapters: implementaciones concretas de los ports del core.
//!
//! Este crate provee:
//! - Dobles en memoria (`memory`) para tests y demos.
//! - Lectores de archivo (`file`): el audit log que escribe el BPO y el
//!   archivo de datos del PLM.
//! - Clientes HTTP (`http`): disparo de workflows y health check contra el
//!   BPO.
//! - Configuración por variables de entorno (`config`).
//!
//! El core sólo conoce los traits `AuditFeed` / `ProductCatalog` /
//! `WorkflowTrigger`; aquí vive todo el IO.

pub mod config;
pub mod file;
pub mod http;
pub mod memory;

pub use config::ServiceConfig;
pub use file::{FileAuditFeed, FileProductCatalog};
pub use http::{BpoHealthProbe, HttpTriggerGateway};
pub use memory::{FailingTrigger, InMemoryAuditFeed, StaticProductCatalog, StaticTrigger};

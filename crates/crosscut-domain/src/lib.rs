// crosscut-domain library entry point
pub mod audit;
pub mod product;
pub mod trigger;
pub mod workflow;

pub use audit::{AuditAction, AuditEntry, AuditStatus};
pub use product::{Product, ProductComponent};
pub use trigger::{ServiceHealth, TriggerAck, TriggerRequest};
pub use workflow::{WorkflowStatus, WorkflowView};

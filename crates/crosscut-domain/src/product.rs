//! Catálogo de productos del PLM (estático, sin ciclo de vida aquí).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub voltage: String,
    pub description: String,
    pub revision: String,
    pub components: Vec<ProductComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductComponent {
    pub name: String,
    pub voltage: String,
    pub test_type: String,
}

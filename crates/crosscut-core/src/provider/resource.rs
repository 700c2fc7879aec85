//! Colecciones expuestas por el facade.
//!
//! El despacho por nombre de colección del UI original (switch sobre
//! strings) se reemplaza por un enum cerrado: los nombres desconocidos se
//! rechazan en el borde (`FromStr`) y el resto del core hace match
//! exhaustivo.
use std::fmt;
use std::str::FromStr;

use crate::errors::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Workflows,
    Audit,
    Products,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Workflows => "workflows",
            Resource::Audit => "audit",
            Resource::Products => "products",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "workflows" => Ok(Resource::Workflows),
            "audit" => Ok(Resource::Audit),
            "products" => Ok(Resource::Products),
            other => Err(ProviderError::UnknownResource(other.to_string())),
        }
    }
}

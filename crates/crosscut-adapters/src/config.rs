//! Carga de configuración desde variables de entorno.
//! Sigue las convenciones de los servicios Go: `AUDIT_LOG_PATH`,
//! `BPO_SERVICE_URL`, `PLM_DATA_PATH`.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Audit log que escribe el BPO (array JSON en disco).
    pub audit_log_path: PathBuf,
    /// Base URL del BPO (disparo de workflows y health).
    pub bpo_service_url: String,
    /// Archivo de datos del PLM (`{"products": [...]}`).
    pub plm_data_path: PathBuf,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let audit_log_path = env::var("AUDIT_LOG_PATH").unwrap_or_else(|_| "audit-log.json".to_string());
        let bpo_service_url = env::var("BPO_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let plm_data_path = env::var("PLM_DATA_PATH").unwrap_or_else(|_| "plm-data.json".to_string());
        Self { audit_log_path: PathBuf::from(audit_log_path),
               bpo_service_url,
               plm_data_path: PathBuf::from(plm_data_path) }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

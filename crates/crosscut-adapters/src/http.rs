//! Clientes HTTP contra el BPO.
//!
//! Una sola llamada por operación, sin reintentos: disparar un workflow no
//! es idempotente (un segundo disparo produce un segundo `workflow_id`).
use async_trait::async_trait;
use crosscut_core::errors::UpstreamError;
use crosscut_core::ports::WorkflowTrigger;
use crosscut_domain::{ServiceHealth, TriggerAck, TriggerRequest};

fn upstream(context: &str, err: reqwest::Error) -> UpstreamError {
    UpstreamError::Failed(format!("{}: {}", context, err))
}

/// Gateway de disparo: `POST /v1/execute-workflow`.
#[derive(Debug, Clone)]
pub struct HttpTriggerGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTriggerGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(),
               base_url: base_url.into() }
    }
}

#[async_trait]
impl WorkflowTrigger for HttpTriggerGateway {
    async fn trigger(&self, request: &TriggerRequest) -> Result<TriggerAck, UpstreamError> {
        let url = format!("{}/v1/execute-workflow", self.base_url);
        let response = self.client
                           .post(&url)
                           .json(request)
                           .send()
                           .await
                           .map_err(|e| upstream("execute-workflow", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Failed(format!("execute-workflow returned {}: {}", status, body)));
        }

        response.json::<TriggerAck>()
                .await
                .map_err(|e| upstream("decode trigger ack", e))
    }
}

/// Health check del BPO: `GET /health`.
#[derive(Debug, Clone)]
pub struct BpoHealthProbe {
    client: reqwest::Client,
    base_url: String,
}

impl BpoHealthProbe {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(),
               base_url: base_url.into() }
    }

    pub async fn health(&self) -> Result<ServiceHealth, UpstreamError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client
                           .get(&url)
                           .send()
                           .await
                           .map_err(|e| upstream("health", e))?;

        if !response.status().is_success() {
            return Err(UpstreamError::Failed(format!("health returned {}", response.status())));
        }

        response.json::<ServiceHealth>()
                .await
                .map_err(|e| upstream("decode health", e))
    }
}

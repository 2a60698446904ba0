//! HTTP Drafting Engine
//!
//! reqwest implementation of the `DraftingEngine` port

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Serialize;

use super::models::DraftRequestBody;
use crate::domain::entities::workflow_result::WorkflowResult;
use crate::domain::errors::TransportError;
use crate::domain::repositories::drafting_engine::{DraftingEngine, RefineRequest};

/// Fallback base address when nothing else is configured
pub const DEFAULT_BASE_ADDRESS: &str = "http://localhost:8000";

pub const DRAFT_PATH: &str = "/draft";
pub const REFINE_PATH: &str = "/refine";

/// Drafting engine reached over HTTP
///
/// No retries and no timeout of its own; any timeout belongs to the
/// `reqwest::Client` passed in.
pub struct HttpDraftingEngine {
    base_address: String,
    http: Client,
}

impl HttpDraftingEngine {
    pub fn new(base_address: impl Into<String>) -> Self {
        Self::with_client(base_address, Client::new())
    }

    pub fn with_client(base_address: impl Into<String>, http: Client) -> Self {
        let base_address = base_address.into().trim_end_matches('/').to_string();
        Self { base_address, http }
    }

    pub fn base_address(&self) -> &str {
        &self.base_address
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_address, path)
    }

    /// POST a JSON body and decode a `WorkflowResult`
    ///
    /// Any non-2xx status becomes `TransportError::Status` with the raw body.
    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<WorkflowResult, TransportError> {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("POST {} returned {}", url, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("POST {} returned {}", url, status);
        response
            .json::<WorkflowResult>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl DraftingEngine for HttpDraftingEngine {
    async fn draft(&self, raw_text: &str) -> Result<WorkflowResult, TransportError> {
        self.post_json(DRAFT_PATH, &DraftRequestBody { text: raw_text })
            .await
    }

    async fn refine(&self, request: &RefineRequest) -> Result<WorkflowResult, TransportError> {
        self.post_json(REFINE_PATH, request).await
    }
}

//! JSON client for the submit and resource endpoints

use serde::de::DeserializeOwned;

use crate::types::{FeedbackSubmission, Resource, SubmitErrorBody};

/// Remote resource list endpoint.
const RESOURCES_PATH: &str = "/api/resources";
/// Static fallback shipped alongside the site.
const RESOURCES_FALLBACK_PATH: &str = "/data/resources.json";
/// Feedback submission endpoint.
const SUBMIT_PATH: &str = "/api/submit";

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("resource list unavailable")]
    LoadFailed,
}

/// Thin JSON client over the site's endpoints.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Submit free-text feedback. A non-2xx response surfaces as `Rejected`,
    /// carrying whatever message the server attached.
    pub async fn submit_feedback(&self, content: &str) -> Result<(), ApiError> {
        let body = FeedbackSubmission::new(content);
        let response = self
            .client
            .post(self.url(SUBMIT_PATH))
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status().as_u16();
        let message = response
            .json::<SubmitErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| "submission failed".to_string());

        Err(ApiError::Rejected { status, message })
    }

    /// Fetch the resource list, falling back to the bundled static file when
    /// the endpoint is down. Both failing collapses into `LoadFailed`.
    pub async fn fetch_resources(&self) -> Result<Vec<Resource>, ApiError> {
        match self.get_json::<Vec<Resource>>(RESOURCES_PATH).await {
            Ok(resources) => Ok(resources),
            Err(primary) => {
                tracing::warn!(
                    error = %primary,
                    "resource endpoint unavailable, trying static fallback"
                );
                self.get_json(RESOURCES_FALLBACK_PATH)
                    .await
                    .map_err(|fallback| {
                        tracing::error!(error = %fallback, "fallback resource file unavailable");
                        ApiError::LoadFailed
                    })
            }
        }
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Client for in-browser requests, rooted at the current origin.
pub fn browser_client() -> ApiClient {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    ApiClient::new(origin)
}

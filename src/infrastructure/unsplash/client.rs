use std::time::Duration;

use reqwest::{header, Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::errors::UnsplashApiError;
use super::types::{RawPhoto, RawSearchResponse, UnsplashQuery};
use crate::domain::models::ProviderConfig;

/// HTTP client for the Unsplash API
///
/// Provides the two paged read endpoints the provider consumes plus the
/// fire-and-forget download ping. One synchronous outbound call per query,
/// no retries; the request timeout is the only resilience mechanism.
pub struct UnsplashClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl UnsplashClient {
    /// Create a new Unsplash API client
    ///
    /// # Arguments
    /// * `config` - Provider configuration (credential, base URL, timeout)
    ///
    /// # Returns
    /// * `Result<Self, UnsplashApiError>` - Client instance or error
    ///
    /// A missing API key is not an error here: requests are sent without an
    /// Authorization header and the upstream rejection surfaces through the
    /// normal error path.
    pub fn new(config: &ProviderConfig) -> Result<Self, UnsplashApiError> {
        let api_key_scrubbed = match config.api_key.as_deref() {
            Some(key) if key.len() > 8 => format!("{}...[REDACTED]", &key[..8]),
            Some(_) => "[REDACTED]".to_string(),
            None => "[UNSET]".to_string(),
        };

        info!(
            "Initializing Unsplash API client: base_url={}, timeout={}s, api_key={}",
            config.base_url, config.timeout_secs, api_key_scrubbed
        );

        let mut headers = header::HeaderMap::new();
        headers.insert("Accept-Version", header::HeaderValue::from_static("v1"));
        if let Some(ref key) = config.api_key {
            let value = header::HeaderValue::from_str(&format!("Client-ID {key}"))
                .map_err(|e| UnsplashApiError::InvalidRequest(format!("Invalid API key: {e}")))?;
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .map_err(UnsplashApiError::NetworkError)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one page of the photo listing
    ///
    /// `GET /photos`. The response is a bare array of photo objects in
    /// stream order, sponsored inserts included.
    #[instrument(skip(self, query), fields(page = query.page, per_page = query.per_page))]
    pub async fn list_photos(
        &self,
        query: &UnsplashQuery,
    ) -> Result<Vec<RawPhoto>, UnsplashApiError> {
        self.get_json("/photos", &query.params()).await
    }

    /// Fetch one page of search results
    ///
    /// `GET /search/photos`. The response wraps the photos in an envelope
    /// with total counts; results are ordered by relevance.
    #[instrument(skip(self, query), fields(page = query.page, per_page = query.per_page))]
    pub async fn search_photos(
        &self,
        query: &UnsplashQuery,
    ) -> Result<RawSearchResponse, UnsplashApiError> {
        self.get_json("/search/photos", &query.params()).await
    }

    /// Report a download of a photo
    ///
    /// `GET /photos/{id}/download`, dispatched on the runtime without
    /// awaiting the outcome. The upstream usage terms require the ping;
    /// nothing in our flow depends on it, so failures are dropped after a
    /// debug log.
    pub fn track_download(&self, photo_id: &str) {
        let url = format!("{}/photos/{photo_id}/download", self.base_url);
        let client = self.http_client.clone();
        tokio::spawn(async move {
            match client.get(&url).send().await {
                Ok(response) => debug!(status = %response.status(), %url, "download tracked"),
                Err(err) => debug!(%err, %url, "download tracking dropped"),
            }
        });
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, UnsplashApiError> {
        let url = format!("{}{path}", self.base_url);

        debug!("GET {}", url);

        let response = self.http_client.get(&url).query(params).send().await?;

        self.handle_response(response).await
    }

    /// Check the status and decode the body, classifying failures
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, UnsplashApiError> {
        let status = response.status();

        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            warn!("API error ({}): {}", status, body);
            return Err(UnsplashApiError::from_status(status, body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| UnsplashApiError::MalformedBody(e.to_string()))
    }
}

// src/api/client.rs
//! The Notion client: base URL, headers and a transport.
//!
//! Operations live in the sibling `databases`, `pages` and `blocks` modules;
//! they all funnel through [`NotionClient::request`].

use super::headers::ApiHeaders;
use super::parser::parse_api_response;
use super::transport::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::types::ValidationError;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Stateless Notion REST client. Cloning shares the transport.
#[derive(Clone)]
pub struct NotionClient {
    transport: Arc<dyn HttpTransport>,
    headers: HeaderMap,
    base_url: String,
}

impl NotionClient {
    /// Creates a client backed by reqwest.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()?))
    }

    /// Creates a client that sends through `transport`.
    pub fn with_transport(
        config: &ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        let headers = ApiHeaders::new(&config.api_key, config.notion_version.clone());
        Self::from_headers(&headers, &config.base_url, transport)
    }

    /// Creates a client from a prebuilt header set.
    pub fn from_headers(
        headers: &ApiHeaders,
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            transport,
            headers: headers.to_header_map()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for an API path such as `pages/{id}`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends one request and parses the reply, raising on the error sentinel.
    pub(crate) async fn request<T>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request_with_query(operation, method, path, &[], body)
            .await
    }

    /// Like [`request`](Self::request), with form-encoded query parameters.
    pub(crate) async fn request_with_query<T>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = self.url_with_query(path, query)?;
        let mut request = HttpRequest::new(method, url, self.headers.clone());
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.transport.send(request).await?;
        parse_api_response(operation, response)
    }

    fn url_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<String, AppError> {
        let raw = self.url(path);
        if query.is_empty() {
            return Ok(raw);
        }

        let mut url = Url::parse(&raw).map_err(|e| ValidationError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut().extend_pairs(query);
        Ok(url.into())
    }

    /// Serializes a request body.
    pub(crate) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, AppError> {
        Ok(serde_json::to_string(body)?)
    }
}

impl std::fmt::Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

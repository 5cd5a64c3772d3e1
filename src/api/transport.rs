// src/api/transport.rs
//! The HTTP seam.
//!
//! Every outbound call in the crate goes through an [`HttpTransport`]. The
//! production implementation wraps a reqwest `Client`; tests plug in a
//! recording double and never touch the network.

use crate::constants::HTTP_REQUEST_TIMEOUT_SECS;
use crate::error::AppError;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;

/// A fully-built outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body: None,
        }
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: StatusCode,
    pub url: String,
}

impl ApiResponse<String> {
    /// A response as a transport double would produce it.
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            data: body.into(),
            status,
            url: url.into(),
        }
    }
}

/// Performs one HTTP exchange and hands back the raw body.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, AppError>;
}

/// [`HttpTransport`] backed by a pooled reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already-configured reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, AppError> {
        log::debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        extract_response_text(response).await
    }
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(
    response: reqwest::Response,
) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    log::debug!("{} <- {} ({} bytes)", status, url, text.len());

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

// src/api/headers.rs
//! Authentication and versioning headers for Notion requests.

use crate::constants::NOTION_DEFAULT_VERSION;
use crate::error::AppError;
use crate::types::ApiKey;
use reqwest::header::{self, HeaderMap, HeaderValue};

/// The three headers every Notion call carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHeaders {
    pub authorization: String,
    pub notion_version: String,
    pub content_type: &'static str,
}

impl ApiHeaders {
    /// Builds the header set for `api_key`, pinned to `version`.
    pub fn new(api_key: &ApiKey, version: impl Into<String>) -> Self {
        Self {
            authorization: format!("Bearer {}", api_key.as_str()),
            notion_version: version.into(),
            content_type: "application/json",
        }
    }

    /// Builds the header set with the default `Notion-Version`.
    pub fn with_default_version(api_key: &ApiKey) -> Self {
        Self::new(api_key, NOTION_DEFAULT_VERSION)
    }

    /// Converts into a reqwest header map.
    pub fn to_header_map(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&self.authorization).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
        })?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        headers.insert(
            "Notion-Version",
            HeaderValue::from_str(&self.notion_version).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid Notion-Version value: {}", e))
            })?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type),
        );

        Ok(headers)
    }
}

// src/lib.rs
//! notionkit: a typed Notion REST client, a MailJet sender and small web
//! utilities.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `ClientConfig`, `MailJetConfig`
//! - **API client**: `NotionClient`, `ApiHeaders`, the `HttpTransport` seam
//! - **Request bodies**: `request::*` builders
//! - **Domain model**: `Page`, `Block`, `PropertyValue` and friends
//! - **Extraction**: `extract::*` (and `extract::legacy`)
//! - **Mail**: `MailJetClient`, `EmailData`
//! - **Utilities**: validation regexes, password digests, `CacheControl`, dates
//!
//! The library never installs a logger; it only emits through `log`.

pub mod api;
pub mod config;
pub mod constants;
mod error;
pub mod extract;
pub mod mail;
pub mod model;
pub mod request;
pub mod types;
pub mod utils;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::ClientConfig;
pub use crate::mail::MailJetConfig;

// --- API Client ---
pub use crate::api::{
    ApiHeaders, ApiResponse, HttpRequest, HttpTransport, NotionClient, ReqwestTransport,
};

// --- Domain Model ---
pub use crate::model::{
    Block, ListBlockChildrenResponse, Page, PaginatedList, Parent, PropertyTypeValue,
    PropertyValue, QueryDatabaseResponse, RichText,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, BlockId, DatabaseId, NotionId, PageId, ValidatedUrl};

// --- Mail ---
pub use crate::mail::{Contact, EmailData, MailJetClient, MailJetResponse};

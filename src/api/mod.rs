// src/api/mod.rs
//! Notion REST API client.
//!
//! One method per endpoint, each a single request: build the body, send it
//! through the transport, raise on the `"object": "error"` sentinel and
//! return the typed JSON.

mod blocks;
pub mod client;
mod databases;
pub mod headers;
mod pages;
pub mod pagination;
pub mod parser;
pub mod transport;

pub use client::NotionClient;
pub use headers::ApiHeaders;
pub use transport::{ApiResponse, HttpRequest, HttpTransport, ReqwestTransport};

// src/constants.rs
//! Fixed endpoints, versions and limits used across the crate.

// ---------------------------------------------------------------------------
// Notion API
// ---------------------------------------------------------------------------

/// Base URL every Notion REST path is joined onto.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// `Notion-Version` header value sent when the caller doesn't pick one.
pub const NOTION_DEFAULT_VERSION: &str = "2022-02-22";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Upper bound on cursor round-trips in the `*_all` helpers.
pub const NOTION_MAX_PAGINATION_ROUNDS: u32 = 1_000;

// ---------------------------------------------------------------------------
// MailJet
// ---------------------------------------------------------------------------

/// MailJet v3.1 REST base URL.
pub const MAILJET_API_BASE_URL: &str = "https://api.mailjet.com/v3.1";

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// Per-request timeout for the reqwest transport, in seconds.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

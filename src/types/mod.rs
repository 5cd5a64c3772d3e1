//! Validated input newtypes.

use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Filter condition '{condition}' needs a value")]
    MissingFilterValue { condition: &'static str },

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid date '{input}': expected day-month-year (e.g. 28-11-1986)")]
    InvalidDate { input: String },
}

//! Serde types for the Notion objects this crate reads and returns.
//!
//! The shapes are Notion's. They are typed only as far as the extractors
//! need and stay lenient about everything else.

mod block;
mod property_value;
mod rich_text;

pub use block::Block;
pub use property_value::{PropertyTypeValue, PropertyValue};
pub use rich_text::{Annotations, DateValue, Link, RichText, SelectOption, TextContent};

use crate::types::{BlockId, DatabaseId, PageId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Notion page: its properties, not its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub object: String,
    pub id: PageId,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    /// Looks a property up by its display name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The page title, read from whichever property has the `title` type.
    pub fn title(&self) -> String {
        let title = self
            .properties
            .values()
            .find(|p| matches!(p.value, PropertyTypeValue::Title { .. }));
        crate::extract::page_title_value(title)
    }
}

/// Parent reference with typed IDs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page { page_id: PageId },
    #[serde(rename = "database_id")]
    Database { database_id: DatabaseId },
    #[serde(rename = "block_id")]
    Block { block_id: BlockId },
    #[serde(rename = "workspace")]
    Workspace,
    #[serde(other)]
    Other,
}

/// A page of results from a paginated Notion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedList<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// `POST /databases/{id}/query`
pub type QueryDatabaseResponse = PaginatedList<Page>;

/// `GET /blocks/{id}/children`
pub type ListBlockChildrenResponse = PaginatedList<Block>;

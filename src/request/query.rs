//! Database query bodies for `POST /databases/{id}/query`.

use serde::Serialize;
use serde_json::{json, Map, Value};

/// Rich-text filter conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TextCondition {
    Equals,
    DoesNotEqual,
    Contains,
    DoesNotContain,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
}

impl TextCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::DoesNotEqual => "does_not_equal",
            Self::Contains => "contains",
            Self::DoesNotContain => "does_not_contain",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::IsEmpty => "is_empty",
            Self::IsNotEmpty => "is_not_empty",
        }
    }

    /// `is_empty` / `is_not_empty` take `true` instead of a value.
    /// `false` for the emptiness checks, which compare against `true`.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKind {
    CreatedTime,
    LastEditedTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One entry of a query's `sorts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Sort {
    Timestamp {
        timestamp: TimestampKind,
        direction: SortDirection,
    },
    Property {
        property: String,
        direction: SortDirection,
    },
}

/// Body of a database query. Absent parts are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl DatabaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a raw Notion filter object as-is.
    pub fn with_filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.start_cursor = cursor;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Arguments of [`filter_rich_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextFilter {
    pub property_name: String,
    pub condition: TextCondition,
    pub content: String,
    pub timestamp: Option<TimestampKind>,
    pub direction: Option<SortDirection>,
}

impl RichTextFilter {
    pub fn new(
        property_name: impl Into<String>,
        condition: TextCondition,
        content: impl Into<String>,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            condition,
            content: content.into(),
            timestamp: None,
            direction: None,
        }
    }

    pub fn sorted_by(mut self, timestamp: TimestampKind, direction: SortDirection) -> Self {
        self.timestamp = Some(timestamp);
        self.direction = Some(direction);
        self
    }
}

/// Builds a query filtering one rich-text property.
///
/// A timestamp sort is added only when both the timestamp and the direction
/// are set.
pub fn filter_rich_text(filter: &RichTextFilter) -> DatabaseQuery {
    let value = if filter.condition.takes_value() {
        Value::String(filter.content.clone())
    } else {
        Value::Bool(true)
    };

    let mut condition = Map::new();
    condition.insert(filter.condition.as_str().to_string(), value);

    let mut query = DatabaseQuery::new().with_filter(json!({
        "property": filter.property_name,
        "rich_text": condition,
    }));

    if let (Some(timestamp), Some(direction)) = (filter.timestamp, filter.direction) {
        query = query.with_sort(Sort::Timestamp {
            timestamp,
            direction,
        });
    }

    query
}

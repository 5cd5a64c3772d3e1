//! Property-value inputs for page create and update bodies.

use crate::model::Link;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

/// A rich-text run in a request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextInput {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    text: TextInput,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct TextInput {
    content: String,
    // Some(None) serializes as `"link": null`; None drops the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<Option<Link>>,
}

impl RichTextInput {
    /// Fully spelled-out run: `{"type":"text","text":{"content":..,"link":null}}`.
    pub fn text(content: &str) -> Self {
        Self {
            kind: Some("text"),
            text: TextInput {
                content: content.to_string(),
                link: Some(None),
            },
        }
    }

    /// Minimal run: `{"text":{"content":..}}`.
    pub fn content(content: &str) -> Self {
        Self {
            kind: None,
            text: TextInput {
                content: content.to_string(),
                link: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateInput {
    pub start: NaiveDate,
}

/// One property value as Notion accepts it on create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyInput {
    Title(Vec<RichTextInput>),
    RichText(Vec<RichTextInput>),
    Select(NamedOption),
    Number(f64),
    Email(String),
    Checkbox(bool),
    PhoneNumber(String),
    Date(DateInput),
}

pub fn query_title(value: &str) -> PropertyInput {
    PropertyInput::Title(vec![RichTextInput::content(value)])
}

pub fn query_rich_text(value: &str) -> PropertyInput {
    PropertyInput::RichText(vec![RichTextInput::content(value)])
}

pub fn query_select(value: &str) -> PropertyInput {
    PropertyInput::Select(NamedOption {
        name: value.to_string(),
    })
}

pub fn query_number(value: f64) -> PropertyInput {
    PropertyInput::Number(value)
}

pub fn query_email(value: &str) -> PropertyInput {
    PropertyInput::Email(value.to_string())
}

pub fn query_checkbox(value: bool) -> PropertyInput {
    PropertyInput::Checkbox(value)
}

pub fn query_phone_number(value: &str) -> PropertyInput {
    PropertyInput::PhoneNumber(value.to_string())
}

/// A single-day date. Use [`parse_day_month_year`](crate::utils::parse_day_month_year)
/// for `28-11-1986` style input.
pub fn query_single_date(value: NaiveDate) -> PropertyInput {
    PropertyInput::Date(DateInput { start: value })
}

/// Ordered map of property name to input value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PageProperties(IndexMap<String, PropertyInput>);

impl PageProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a property, builder style.
    pub fn with(mut self, name: impl Into<String>, value: PropertyInput) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body of `PATCH /pages/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePageProperties {
    pub properties: PageProperties,
}

/// Body of `POST /pages` for a row in a database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatabasePage {
    pub parent: DatabaseParent,
    pub properties: PageProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseParent {
    pub database_id: String,
}

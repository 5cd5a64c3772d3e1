//! Reading plain values out of page properties.
//!
//! Every extractor takes the property as found on the page (`None` when the
//! page has no such property) and falls back to an empty value when the
//! property is missing or holds another type.
//!
//! [`legacy`] keeps the older defaults some callers still depend on.

pub mod legacy;

use crate::model::{PropertyTypeValue, PropertyValue};

fn kind(value: Option<&PropertyValue>) -> Option<&PropertyTypeValue> {
    value.map(|v| &v.value)
}

/// Plain text of the first title run.
pub fn page_title_value(value: Option<&PropertyValue>) -> String {
    match kind(value) {
        Some(PropertyTypeValue::Title { title }) => title
            .first()
            .map(|t| t.plain_text.clone())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// All rich-text runs, joined by single spaces.
pub fn paragraph_plain_text(value: Option<&PropertyValue>) -> String {
    match kind(value) {
        Some(PropertyTypeValue::RichText { rich_text }) => rich_text
            .iter()
            .map(|t| t.plain_text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

pub fn select_value(value: Option<&PropertyValue>) -> Option<String> {
    match kind(value) {
        Some(PropertyTypeValue::Select { select }) => select.as_ref().map(|o| o.name.clone()),
        _ => None,
    }
}

pub fn multi_select_value(value: Option<&PropertyValue>) -> Vec<String> {
    match kind(value) {
        Some(PropertyTypeValue::MultiSelect { multi_select }) => {
            multi_select.iter().map(|o| o.name.clone()).collect()
        }
        _ => Vec::new(),
    }
}

/// Name of the current status option.
pub fn status_value(value: Option<&PropertyValue>) -> Option<String> {
    match kind(value) {
        Some(PropertyTypeValue::Status { status }) => status.as_ref().map(|o| o.name.clone()),
        _ => None,
    }
}

pub fn email_value(value: Option<&PropertyValue>) -> String {
    match kind(value) {
        Some(PropertyTypeValue::Email { email }) => email.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

pub fn phone_value(value: Option<&PropertyValue>) -> String {
    match kind(value) {
        Some(PropertyTypeValue::PhoneNumber { phone_number }) => {
            phone_number.clone().unwrap_or_default()
        }
        _ => String::new(),
    }
}

pub fn checkbox_value(value: Option<&PropertyValue>) -> Option<bool> {
    match kind(value) {
        Some(PropertyTypeValue::Checkbox { checkbox }) => Some(*checkbox),
        _ => None,
    }
}

/// The `start` of a date property, as Notion sent it.
pub fn date_value(value: Option<&PropertyValue>) -> String {
    match kind(value) {
        Some(PropertyTypeValue::Date { date: Some(date) }) => date.start.clone(),
        _ => String::new(),
    }
}

pub fn number_value(value: Option<&PropertyValue>) -> Option<f64> {
    match kind(value) {
        Some(PropertyTypeValue::Number { number }) => *number,
        _ => None,
    }
}

pub fn url_value(value: Option<&PropertyValue>) -> String {
    match kind(value) {
        Some(PropertyTypeValue::Url { url }) => url.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

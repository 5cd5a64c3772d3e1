//! Extractors with the defaults of the older `notiondb` helpers.
//!
//! Only the functions whose behavior differs live here; the rest are
//! re-exported from the parent module unchanged.

use crate::model::{PropertyTypeValue, PropertyValue};

pub use super::{
    date_value, email_value, multi_select_value, number_value, page_title_value, phone_value,
    status_value, url_value,
};

/// Every rich-text run prefixed with a space: `" a b"`.
pub fn paragraph_plain_text(value: Option<&PropertyValue>) -> String {
    match value.map(|v| &v.value) {
        Some(PropertyTypeValue::RichText { rich_text }) => {
            rich_text.iter().fold(String::new(), |mut all, item| {
                all.push(' ');
                all.push_str(&item.plain_text);
                all
            })
        }
        _ => String::new(),
    }
}

/// Option name, or `""` when unset.
pub fn select_value(value: Option<&PropertyValue>) -> String {
    super::select_value(value).unwrap_or_default()
}

/// Checkbox state, `false` when absent.
pub fn checkbox_value(value: Option<&PropertyValue>) -> bool {
    super::checkbox_value(value).unwrap_or(false)
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").expect("static regex compiles");
}

/// Strips every `<...>` tag, keeping the text between them.
pub fn remove_html_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").into_owned()
}

/// True for `None` and for strings made only of spaces.
///
/// Only `' '` counts as blank; tabs and newlines do not.
pub fn is_empty(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(s) => s.chars().all(|c| c == ' '),
    }
}

//! Form-field checks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ENGLISH_NAME: Regex =
        Regex::new(r"^([a-zA-Z0-9. _]){0,25}$").expect("static regex compiles");
    static ref ANY_NAME: Regex =
        Regex::new(r#"^[^~!@#$%^&*()|`;:"=']*$"#).expect("static regex compiles");
    static ref EMAIL: Regex = Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$")
        .expect("static regex compiles");
    static ref EXTERNAL_URL: Regex = Regex::new(
        r"^http(s)?://[\w.-]+(?:\.[\w.-]+)+[\w\-._~:/?#\[\]@!$&'()*+,;=.]+$"
    )
    .expect("static regex compiles");
}

/// Up to 25 ASCII letters, digits, dots, underscores and spaces.
pub fn is_english_name(value: &str) -> bool {
    ENGLISH_NAME.is_match(value)
}

/// Any text free of ``~!@#$%^&*()|`;:"='``.
pub fn is_any_name(value: &str) -> bool {
    ANY_NAME.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// An absolute http(s) URL with a dotted host.
pub fn is_external_url(value: &str) -> bool {
    EXTERNAL_URL.is_match(value)
}

//! Small helpers shared by the CLI and library users.

mod cache_control;
mod dates;
mod html;
mod password;
pub mod validation;

pub use cache_control::{CacheControl, Visibility};
pub use dates::{format_day_month_year, parse_day_month_year};
pub use html::{is_empty, remove_html_tags};
pub use password::{hash_password, verify_password};
pub use validation::{is_any_name, is_email, is_english_name, is_external_url};

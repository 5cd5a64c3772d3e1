//! Request-body builders for the Notion API.
//!
//! Each builder returns a `Serialize` value that the client methods accept
//! directly.

mod blocks;
mod properties;
mod query;

pub use blocks::{
    new_plain_text_blocks, update_plain_text_block, AppendBlockChildren, BlockInput,
    ParagraphInput, UpdateParagraph,
};
pub use properties::{
    query_checkbox, query_email, query_number, query_phone_number, query_rich_text,
    query_select, query_single_date, query_title, CreateDatabasePage, DatabaseParent, DateInput,
    NamedOption, PageProperties, PropertyInput, RichTextInput, UpdatePageProperties,
};
pub use query::{
    filter_rich_text, DatabaseQuery, RichTextFilter, Sort, SortDirection, TextCondition,
    TimestampKind,
};

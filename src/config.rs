use crate::constants::{NOTION_API_BASE_URL, NOTION_DEFAULT_VERSION};
use crate::error::AppError;
use crate::request::{
    filter_rich_text, DatabaseQuery, RichTextFilter, Sort, SortDirection, TextCondition,
    TimestampKind,
};
use crate::types::{ApiKey, NotionId, ValidatedUrl, ValidationError};
use crate::utils::CacheControl;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read and update pages
    #[command(subcommand)]
    Page(PageCommand),

    /// Query databases
    #[command(subcommand)]
    Db(DbCommand),

    /// Read, append, update and delete blocks
    #[command(subcommand)]
    Blocks(BlocksCommand),

    /// Send transactional email through MailJet
    #[command(subcommand)]
    Mail(MailCommand),

    /// Print a Cache-Control header value
    CacheControl(CacheControlArgs),
}

#[derive(Subcommand, Debug)]
pub enum PageCommand {
    /// Retrieve a page's properties
    Get { id: NotionId },

    /// List the blocks of a page
    Content {
        id: NotionId,
        /// Follow pagination cursors until every block is fetched
        #[arg(long, default_value_t = false)]
        all: bool,
    },

    /// Patch a page with a raw JSON body (e.g. '{"properties": {...}}')
    Update {
        id: NotionId,
        #[arg(long)]
        json: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Query a database, optionally filtered on a rich-text property
    Query(QueryArgs),
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    pub id: NotionId,

    /// Rich-text property to filter on
    #[arg(long)]
    pub property: Option<String>,

    /// Filter condition
    #[arg(long, value_enum, default_value_t = TextCondition::Contains)]
    pub condition: TextCondition,

    /// Value compared against the property (unused by is-empty/is-not-empty)
    #[arg(long, requires = "property")]
    pub content: Option<String>,

    /// Sort by this timestamp (needs --direction)
    #[arg(long, value_enum)]
    pub timestamp: Option<TimestampKind>,

    /// Sort direction (needs --timestamp)
    #[arg(long, value_enum)]
    pub direction: Option<SortDirection>,

    /// Follow pagination cursors until every row is fetched
    #[arg(long, default_value_t = false)]
    pub all: bool,
}

impl QueryArgs {
    /// Builds the query body; `--content` is only needed when the condition compares a value.
    pub fn to_query(&self) -> Result<DatabaseQuery, AppError> {
        let sort = self.timestamp.zip(self.direction);

        let Some(property) = &self.property else {
            return Ok(match sort {
                Some((timestamp, direction)) => DatabaseQuery::new().with_sort(Sort::Timestamp {
                    timestamp,
                    direction,
                }),
                None => DatabaseQuery::new(),
            });
        };

        let content = match (&self.content, self.condition.takes_value()) {
            (Some(content), _) => content.as_str(),
            (None, false) => "",
            (None, true) => {
                return Err(ValidationError::MissingFilterValue {
                    condition: self.condition.as_str(),
                }
                .into())
            }
        };

        let mut filter = RichTextFilter::new(property, self.condition, content);
        if let Some((timestamp, direction)) = sort {
            filter = filter.sorted_by(timestamp, direction);
        }
        Ok(filter_rich_text(&filter))
    }
}

#[derive(Subcommand, Debug)]
pub enum BlocksCommand {
    /// Retrieve a single block
    Get { id: NotionId },

    /// Append plain-text paragraphs to a page
    Append {
        page_id: NotionId,
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Replace the text of a paragraph block
    Update { id: NotionId, text: String },

    /// Delete one or more blocks
    Delete {
        #[arg(required = true)]
        ids: Vec<NotionId>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MailCommand {
    /// Send one HTML email
    Send(SendMailArgs),
}

#[derive(Args, Debug)]
pub struct SendMailArgs {
    #[arg(long)]
    pub from_name: String,
    #[arg(long)]
    pub from_email: String,
    #[arg(long)]
    pub to_name: String,
    #[arg(long)]
    pub to_email: String,
    #[arg(long)]
    pub subject: String,
    /// File holding the HTML body
    #[arg(long)]
    pub html_file: PathBuf,
}

#[derive(Args, Debug)]
pub struct CacheControlArgs {
    /// Mark the response private instead of public
    #[arg(long, default_value_t = false)]
    pub private: bool,
    #[arg(long)]
    pub max_age: Option<u32>,
    #[arg(long)]
    pub s_maxage: Option<u32>,
    #[arg(long)]
    pub stale_while_revalidate: Option<u32>,
    #[arg(long)]
    pub stale_if_error: Option<u32>,
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,
    #[arg(long, default_value_t = false)]
    pub no_store: bool,
    #[arg(long, default_value_t = false)]
    pub must_revalidate: bool,
    #[arg(long, default_value_t = false)]
    pub immutable: bool,
}

impl CacheControlArgs {
    pub fn to_cache_control(&self) -> CacheControl {
        let mut value = CacheControl::new();
        if self.private {
            value = value.private();
        }
        if self.no_cache {
            value = value.no_cache();
        }
        if self.no_store {
            value = value.no_store();
        }
        if let Some(seconds) = self.max_age {
            value = value.max_age(seconds);
        }
        if let Some(seconds) = self.s_maxage {
            value = value.s_maxage(seconds);
        }
        if let Some(seconds) = self.stale_while_revalidate {
            value = value.stale_while_revalidate(seconds);
        }
        if let Some(seconds) = self.stale_if_error {
            value = value.stale_if_error(seconds);
        }
        if self.must_revalidate {
            value = value.must_revalidate();
        }
        if self.immutable {
            value = value.immutable();
        }
        value
    }
}

/// Connection settings for a [`NotionClient`](crate::api::NotionClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: ApiKey,
    pub notion_version: String,
    pub base_url: String,
}

impl ClientConfig {
    /// Settings with the default API version and the public Notion endpoint.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            notion_version: NOTION_DEFAULT_VERSION.to_string(),
            base_url: NOTION_API_BASE_URL.to_string(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = version.into();
        self
    }

    /// Points the client at another http(s) base URL, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, AppError> {
        self.base_url = ValidatedUrl::parse(base_url)?.as_base().to_string();
        Ok(self)
    }

    /// Resolves settings from `NOTION_API_KEY`, `NOTION_VERSION` and `NOTION_BASE_URL`.
    pub fn resolve() -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut config = Self::new(ApiKey::new(api_key_str)?);

        if let Ok(version) = std::env::var("NOTION_VERSION") {
            config = config.with_version(version);
        }
        if let Ok(base_url) = std::env::var("NOTION_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }

        log::debug!(
            "Notion client config: version {}, base {}",
            config.notion_version,
            config.base_url
        );
        Ok(config)
    }
}

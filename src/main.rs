// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notionkit::config::{
    BlocksCommand, Command, CommandLineInput, DbCommand, MailCommand, PageCommand, SendMailArgs,
};
use notionkit::mail::{Contact, EmailData, MailJetClient, MailJetConfig};
use notionkit::request::{new_plain_text_blocks, update_plain_text_block};
use notionkit::{ClientConfig, NotionClient};
use serde::Serialize;
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notionkit.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // stdout carries the JSON results.
    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn notion_client() -> anyhow::Result<NotionClient> {
    let config = ClientConfig::resolve().context("Notion client is not configured")?;
    Ok(NotionClient::new(&config)?)
}

async fn run_page(command: PageCommand) -> anyhow::Result<()> {
    let client = notion_client()?;
    match command {
        PageCommand::Get { id } => print_json(&client.get_page(&id).await?),
        PageCommand::Content { id, all: true } => {
            print_json(&client.get_page_content_all(&id).await?)
        }
        PageCommand::Content { id, all: false } => {
            print_json(&client.get_page_content(&id).await?)
        }
        PageCommand::Update { id, json } => {
            let body: serde_json::Value =
                serde_json::from_str(&json).context("--json is not valid JSON")?;
            print_json(&client.update_page_properties(&id, &body).await?)
        }
    }
}

async fn run_db(command: DbCommand) -> anyhow::Result<()> {
    let client = notion_client()?;
    match command {
        DbCommand::Query(args) => {
            let query = args.to_query()?;
            if args.all {
                print_json(&client.query_database_all(&args.id, &query).await?)
            } else {
                print_json(&client.query_database(&args.id, Some(&query)).await?)
            }
        }
    }
}

#[derive(Serialize)]
struct DeletionOutcome {
    id: String,
    deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn run_blocks(command: BlocksCommand) -> anyhow::Result<()> {
    let client = notion_client()?;
    match command {
        BlocksCommand::Get { id } => print_json(&client.get_block(&id).await?),
        BlocksCommand::Append { page_id, texts } => {
            let body = new_plain_text_blocks(&texts);
            print_json(&client.add_blocks(&page_id, &body).await?)
        }
        BlocksCommand::Update { id, text } => {
            let body = update_plain_text_block(&text);
            print_json(&client.update_block(&id, &body).await?)
        }
        BlocksCommand::Delete { ids } => {
            let results = client.delete_blocks(&ids).await;
            let outcomes: Vec<DeletionOutcome> = ids
                .iter()
                .zip(results)
                .map(|(id, result)| DeletionOutcome {
                    id: id.to_hyphenated(),
                    deleted: result.is_ok(),
                    error: result.err().map(|e| e.to_string()),
                })
                .collect();
            print_json(&outcomes)?;

            let failed = outcomes.iter().filter(|o| !o.deleted).count();
            if failed > 0 {
                anyhow::bail!("{} of {} block deletion(s) failed", failed, outcomes.len());
            }
            Ok(())
        }
    }
}

async fn run_mail(command: MailCommand) -> anyhow::Result<()> {
    match command {
        MailCommand::Send(SendMailArgs {
            from_name,
            from_email,
            to_name,
            to_email,
            subject,
            html_file,
        }) => {
            let html_body = fs::read_to_string(&html_file)
                .with_context(|| format!("Failed to read {}", html_file.display()))?;
            let config = MailJetConfig::from_env().context("MailJet is not configured")?;
            let client = MailJetClient::new(config)?;
            let email = EmailData {
                sender: Contact::new(from_name, from_email),
                receiver: Contact::new(to_name, to_email),
                subject,
                html_body,
            };
            print_json(&client.send(&email).await?)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    match cli.command {
        Command::Page(command) => run_page(command).await,
        Command::Db(command) => run_db(command).await,
        Command::Blocks(command) => run_blocks(command).await,
        Command::Mail(command) => run_mail(command).await,
        Command::CacheControl(args) => {
            println!("{}", args.to_cache_control());
            Ok(())
        }
    }
}

// src/mail/mailjet.rs
//! MailJet v3.1 send API.
//!
//! Docs: <https://dev.mailjet.com/email/reference/send-emails/>

use super::{Contact, EmailData};
use crate::api::parser::preview;
use crate::api::{HttpRequest, HttpTransport, ReqwestTransport};
use crate::constants::MAILJET_API_BASE_URL;
use crate::error::AppError;
use crate::utils::remove_html_tags;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// MailJet API key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct MailJetConfig {
    pub api_key_public: String,
    pub api_key_private: String,
}

impl MailJetConfig {
    pub fn new(api_key_public: impl Into<String>, api_key_private: impl Into<String>) -> Self {
        Self {
            api_key_public: api_key_public.into(),
            api_key_private: api_key_private.into(),
        }
    }

    /// Reads `MAILJET_API_KEY_PUBLIC` and `MAILJET_API_KEY_PRIVATE`.
    pub fn from_env() -> Result<Self, AppError> {
        let read = |name: &str| {
            std::env::var(name).map_err(|_| {
                AppError::MissingConfiguration(format!("{} environment variable not set", name))
            })
        };
        Ok(Self::new(
            read("MAILJET_API_KEY_PUBLIC")?,
            read("MAILJET_API_KEY_PRIVATE")?,
        ))
    }

    fn basic_auth(&self) -> String {
        let pair = format!("{}:{}", self.api_key_public, self.api_key_private);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

impl std::fmt::Debug for MailJetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailJetConfig")
            .field("api_key_public", &self.api_key_public)
            .field("api_key_private", &"[REDACTED]")
            .finish()
    }
}

/// Reply to a send call, one entry per submitted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailJetResponse {
    #[serde(rename = "Messages", default)]
    pub messages: Vec<MessageResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResult {
    /// `"success"` or `"error"`.
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl MessageResult {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendRequest<'a> {
    messages: [OutboundMessage<'a>; 1],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct OutboundMessage<'a> {
    from: Mailbox<'a>,
    to: [Mailbox<'a>; 1],
    subject: &'a str,
    text_part: String,
    #[serde(rename = "HTMLPart")]
    html_part: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Mailbox<'a> {
    email: &'a str,
    name: &'a str,
}

impl<'a> From<&'a Contact> for Mailbox<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            email: &contact.email,
            name: &contact.name,
        }
    }
}

/// Sends mail through MailJet.
#[derive(Clone)]
pub struct MailJetClient {
    transport: Arc<dyn HttpTransport>,
    config: MailJetConfig,
    base_url: String,
}

impl MailJetClient {
    pub fn new(config: MailJetConfig) -> Result<Self, AppError> {
        Ok(Self::with_transport(config, Arc::new(ReqwestTransport::new()?)))
    }

    pub fn with_transport(config: MailJetConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            config,
            base_url: MAILJET_API_BASE_URL.to_string(),
        }
    }

    /// Points the client at another API root.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// `POST /send` with a single message.
    ///
    /// Per-message failures are reported in the returned statuses, not as an
    /// error.
    pub async fn send(&self, email: &EmailData) -> Result<MailJetResponse, AppError> {
        let body = SendRequest {
            messages: [OutboundMessage {
                from: (&email.sender).into(),
                to: [(&email.receiver).into()],
                subject: &email.subject,
                text_part: remove_html_tags(&email.html_body),
                html_part: &email.html_body,
            }],
        };

        let request = HttpRequest::new(
            Method::POST,
            format!("{}/send", self.base_url),
            self.headers()?,
        )
        .with_body(serde_json::to_string(&body)?);

        let response = self.transport.send(request).await?;
        if !response.status.is_success() {
            let message = serde_json::from_str::<Value>(&response.data)
                .ok()
                .and_then(|json| {
                    json.get("ErrorMessage")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| preview(&response.data));
            log::warn!("MailJet send failed with {}: {}", response.status, message);
            return Err(AppError::MailService {
                status: response.status,
                message,
            });
        }

        let parsed: MailJetResponse =
            serde_json::from_str(&response.data).map_err(|e| AppError::MailService {
                status: response.status,
                message: format!("{} (body: {})", e, preview(&response.data)),
            })?;

        log::info!(
            "Sent mail to {}: {}",
            email.receiver.email,
            parsed
                .messages
                .iter()
                .map(|m| m.status.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(parsed)
    }

    fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&self.config.basic_auth()).map_err(|_| {
            AppError::MissingConfiguration("MailJet keys contain invalid characters".to_string())
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl std::fmt::Debug for MailJetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailJetClient")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

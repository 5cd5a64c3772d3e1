// src/mail/mod.rs
//! Transactional mail through MailJet.

mod mailjet;

pub use mailjet::{MailJetClient, MailJetConfig, MailJetResponse, MessageResult};

use serde::{Deserialize, Serialize};

/// A named mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One message: the plain-text part is derived from `html_body` on send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailData {
    pub sender: Contact,
    pub receiver: Contact,
    pub subject: String,
    pub html_body: String,
}

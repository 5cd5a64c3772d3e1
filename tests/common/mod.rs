// tests/common/mod.rs
//! Shared fixtures: a recording transport and canned Notion bodies.

#![allow(dead_code)]

use notionkit::{
    ApiKey, ApiResponse, AppError, ClientConfig, HttpRequest, HttpTransport, NotionClient,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "secret_0123456789abcdefghijklmnop";
pub const PAGE_ID: &str = "216cd41285338087a989cf37889137c3";
pub const PAGE_ID_DASHED: &str = "216cd412-8533-8087-a989-cf37889137c3";
pub const BASE_URL: &str = "https://api.notion.com/v1";

type Responder = dyn Fn(&HttpRequest) -> (StatusCode, String) + Send + Sync;

/// Records every request and answers with a caller-supplied closure.
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responder: Box<Responder>,
}

impl MockTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&HttpRequest) -> (StatusCode, String) + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    /// Answers every request with the same status and JSON body.
    pub fn replying(status: StatusCode, body: Value) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| (status, body.clone()))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse<String>, AppError> {
        let (status, body) = (self.responder)(&request);
        let url = request.url.clone();
        self.requests.lock().unwrap().push(request);
        Ok(ApiResponse::new(status, url, body))
    }
}

pub fn config() -> ClientConfig {
    ClientConfig::new(ApiKey::new(API_KEY).unwrap())
}

pub fn client(transport: Arc<MockTransport>) -> NotionClient {
    NotionClient::with_transport(&config(), transport).unwrap()
}

/// The parsed JSON body of a request.
pub fn body_of(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has no body")).unwrap()
}

pub fn error_body(code: &str, message: &str) -> Value {
    json!({
        "object": "error",
        "status": 400,
        "code": code,
        "message": message,
    })
}

pub fn page_json(id: &str, title: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "created_time": "2024-01-01T00:00:00.000Z",
        "last_edited_time": "2024-01-02T00:00:00.000Z",
        "archived": false,
        "url": format!("https://www.notion.so/{}", id.replace('-', "")),
        "parent": {"type": "database_id", "database_id": "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6"},
        "properties": {
            "Name": {"id": "title", "type": "title", "title": [
                {"type": "text", "text": {"content": title, "link": null}, "plain_text": title}
            ]},
            "Status": {"id": "s%3A", "type": "select", "select": {"id": "1", "name": "Done", "color": "green"}},
            "Email": {"id": "e%3A", "type": "email", "email": "someone@example.com"}
        }
    })
}

pub fn paragraph_json(id: &str, text: &str) -> Value {
    json!({
        "object": "block",
        "id": id,
        "type": "paragraph",
        "has_children": false,
        "archived": false,
        "paragraph": {
            "rich_text": [{"type": "text", "text": {"content": text, "link": null}, "plain_text": text}],
            "color": "default"
        }
    })
}

pub fn list_json(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some(),
    })
}

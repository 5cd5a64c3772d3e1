// src/api/parser.rs
//! Response parsing shared by every Notion operation.
//!
//! The body is parsed as JSON first. A body whose `object` is `"error"` is
//! surfaced as [`AppError::NotionService`] whatever the HTTP status says.

use super::transport::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parses a raw Notion response into `T`, raising on the error sentinel.
pub fn parse_api_response<T>(
    operation: &'static str,
    response: ApiResponse<String>,
) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let json: Value = match serde_json::from_str(&response.data) {
        Ok(json) => json,
        Err(e) => return Err(non_json_failure(operation, &response, e)),
    };

    if let Some(err) = error_from_sentinel(operation, &json, &response) {
        log::warn!("{} failed: {}", operation, err);
        return Err(err);
    }

    serde_json::from_value(json).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", response.url, e);
        AppError::MalformedResponse {
            operation,
            message: format!("{} (body: {})", e, preview(&response.data)),
        }
    })
}

/// Returns the service error described by an error-shaped body, if it is one.
pub fn error_from_sentinel(
    operation: &'static str,
    json: &Value,
    response: &ApiResponse<String>,
) -> Option<AppError> {
    if json.get("object").and_then(Value::as_str) != Some("error") {
        return None;
    }

    let code = json
        .get("code")
        .and_then(Value::as_str)
        .map(NotionErrorCode::from_api_response)
        .unwrap_or_else(|| NotionErrorCode::from_http_status(response.status.as_u16()));
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string();

    Some(AppError::NotionService {
        operation,
        code,
        message,
        status: response.status,
    })
}

fn non_json_failure(
    operation: &'static str,
    response: &ApiResponse<String>,
    err: serde_json::Error,
) -> AppError {
    if response.status.is_success() {
        AppError::MalformedResponse {
            operation,
            message: format!("{} (body: {})", err, preview(&response.data)),
        }
    } else {
        AppError::NotionService {
            operation,
            code: NotionErrorCode::from_http_status(response.status.as_u16()),
            message: format!("HTTP {} from {}", response.status, response.url),
            status: response.status,
        }
    }
}

pub(crate) fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use reqwest::StatusCode;

    fn response(status: StatusCode, body: &str) -> ApiResponse<String> {
        ApiResponse::new(status, "https://api.notion.com/v1/blocks/x", body)
    }

    #[test]
    fn error_sentinel_carries_upstream_message() {
        let body = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find block with ID: abc123",
            "request_id": "req_123"
        }"#;

        let result = parse_api_response::<Block>("get_block", response(StatusCode::NOT_FOUND, body));

        match result {
            Err(AppError::NotionService {
                operation,
                code,
                message,
                status,
            }) => {
                assert_eq!(operation, "get_block");
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(message, "Could not find block with ID: abc123");
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn sentinel_wins_even_on_success_status() {
        let body = r#"{"object": "error", "code": "validation_error", "message": "bad"}"#;
        let err = parse_api_response::<Block>("update_block", response(StatusCode::OK, body))
            .unwrap_err();
        assert_eq!(err.to_string(), "update_block: bad");
    }

    #[test]
    fn non_json_error_status_maps_to_http_code() {
        let err = parse_api_response::<Block>(
            "get_block",
            response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
        )
        .unwrap_err();
        assert_eq!(err.notion_code(), Some(&NotionErrorCode::HttpStatus(502)));
    }

    #[test]
    fn non_json_success_is_malformed() {
        let err =
            parse_api_response::<Block>("get_block", response(StatusCode::OK, "not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse { operation: "get_block", .. }));
    }

    #[test]
    fn wrong_shape_is_malformed_with_preview() {
        let long = format!(r#"{{"object": "block", "padding": "{}"}}"#, "x".repeat(500));
        let err = parse_api_response::<Block>("get_block", response(StatusCode::OK, &long))
            .unwrap_err();
        match err {
            AppError::MalformedResponse { message, .. } => assert!(message.ends_with("...)")),
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }
}

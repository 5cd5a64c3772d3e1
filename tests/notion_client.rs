// tests/notion_client.rs
//! Request construction and error propagation for every Notion operation.

mod common;

use common::*;
use notionkit::request::{
    filter_rich_text, new_plain_text_blocks, query_number, query_select,
    update_plain_text_block, DatabaseQuery, PageProperties, RichTextFilter, SortDirection,
    TextCondition, TimestampKind,
};
use notionkit::{AppError, NotionErrorCode, NotionId};
use pretty_assertions::assert_eq;
use reqwest::{Method, StatusCode};
use serde_json::json;

const BLOCK_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const BLOCK_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
const BLOCK_C: &str = "cccccccccccccccccccccccccccccccc";
const DATABASE_ID: &str = "a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6";

fn id(raw: &str) -> NotionId {
    NotionId::parse(raw).unwrap()
}

fn dashed(raw: &str) -> String {
    id(raw).to_hyphenated()
}

#[tokio::test]
async fn get_page_sends_authenticated_get() {
    let transport = MockTransport::replying(StatusCode::OK, page_json(PAGE_ID_DASHED, "Hello"));
    let page = client(transport.clone()).get_page(&id(PAGE_ID)).await.unwrap();

    assert_eq!(page.title(), "Hello");
    assert_eq!(page.id.as_str(), PAGE_ID);

    let request = transport.only_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url, format!("{}/pages/{}", BASE_URL, PAGE_ID_DASHED));
    assert_eq!(
        request.header("authorization"),
        Some(format!("Bearer {}", API_KEY).as_str())
    );
    assert_eq!(request.header("notion-version"), Some("2022-02-22"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert!(request.body.is_none());
}

#[tokio::test]
async fn page_id_accepts_notion_urls() {
    let transport = MockTransport::replying(StatusCode::OK, page_json(PAGE_ID_DASHED, "Hello"));
    let url_id = id(&format!("https://www.notion.so/workspace/My-Page-{}", PAGE_ID));
    client(transport.clone()).get_page(&url_id).await.unwrap();

    assert!(transport.only_request().url.ends_with(PAGE_ID_DASHED));
}

#[tokio::test]
async fn custom_version_and_base_url() {
    let transport = MockTransport::replying(StatusCode::OK, page_json(PAGE_ID_DASHED, "x"));
    let config = config()
        .with_version("2025-09-03")
        .with_base_url("http://localhost:8080/v1/")
        .unwrap();
    let client = notionkit::NotionClient::with_transport(&config, transport.clone()).unwrap();

    client.get_page(&id(PAGE_ID)).await.unwrap();

    let request = transport.only_request();
    assert_eq!(
        request.url,
        format!("http://localhost:8080/v1/pages/{}", PAGE_ID_DASHED)
    );
    assert_eq!(request.header("notion-version"), Some("2025-09-03"));
}

#[tokio::test]
async fn error_sentinel_surfaces_upstream_message() {
    let transport = MockTransport::replying(
        StatusCode::NOT_FOUND,
        error_body("object_not_found", "Could not find page with ID."),
    );
    let err = client(transport).get_page(&id(PAGE_ID)).await.unwrap_err();

    assert_eq!(err.to_string(), "get_page: Could not find page with ID.");
    assert_eq!(err.notion_code(), Some(&NotionErrorCode::ObjectNotFound));
    assert!(err.notion_code().unwrap().is_not_found());
}

#[tokio::test]
async fn error_sentinel_wins_over_success_status() {
    let transport =
        MockTransport::replying(StatusCode::OK, error_body("validation_error", "bad body"));
    let err = client(transport)
        .update_page_properties(&id(PAGE_ID), &json!({"properties": {}}))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "update_page_properties: bad body");
    assert_eq!(err.upstream_message(), Some("bad body"));
}

#[tokio::test]
async fn every_operation_names_itself_in_errors() {
    let transport =
        MockTransport::replying(StatusCode::BAD_REQUEST, error_body("validation_error", "nope"));
    let client = client(transport);
    let page = id(PAGE_ID);
    let block = id(BLOCK_A);

    let errors = vec![
        client.query_database(&id(DATABASE_ID), None).await.unwrap_err(),
        client.create_page(&json!({})).await.unwrap_err(),
        client.get_page(&page).await.unwrap_err(),
        client.update_page_properties(&page, &json!({})).await.unwrap_err(),
        client.get_page_content(&page).await.unwrap_err(),
        client.get_block(&block).await.unwrap_err(),
        client
            .add_blocks(&page, &new_plain_text_blocks(&["x"]))
            .await
            .unwrap_err(),
        client
            .update_block(&block, &update_plain_text_block("x"))
            .await
            .unwrap_err(),
    ];
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(
        messages,
        vec![
            "query_database: nope",
            "create_page: nope",
            "get_page: nope",
            "update_page_properties: nope",
            "get_page_content: nope",
            "get_block: nope",
            "add_blocks: nope",
            "update_block: nope",
        ]
    );
}

#[tokio::test]
async fn query_database_without_query_sends_no_body() {
    let transport = MockTransport::replying(
        StatusCode::OK,
        list_json(vec![page_json(PAGE_ID_DASHED, "Row")], None),
    );
    let response = client(transport.clone())
        .query_database(&id(DATABASE_ID), None)
        .await
        .unwrap();

    assert_eq!(response.results.len(), 1);
    assert!(!response.has_more);

    let request = transport.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.url,
        format!("{}/databases/{}/query", BASE_URL, dashed(DATABASE_ID))
    );
    assert!(request.body.is_none());
}

#[tokio::test]
async fn query_database_sends_rich_text_filter() {
    let transport = MockTransport::replying(StatusCode::OK, list_json(vec![], None));
    let query = filter_rich_text(
        &RichTextFilter::new("Tags", TextCondition::Contains, "rust")
            .sorted_by(TimestampKind::CreatedTime, SortDirection::Descending),
    );
    client(transport.clone())
        .query_database(&id(DATABASE_ID), Some(&query))
        .await
        .unwrap();

    assert_eq!(
        body_of(&transport.only_request()),
        json!({
            "filter": {"property": "Tags", "rich_text": {"contains": "rust"}},
            "sorts": [{"timestamp": "created_time", "direction": "descending"}]
        })
    );
}

#[tokio::test]
async fn query_database_all_follows_cursors() {
    let transport = MockTransport::new(|request| {
        let body = body_of(request);
        let reply = match body.get("start_cursor").and_then(|c| c.as_str()) {
            None => list_json(
                vec![
                    page_json("11111111111111111111111111111111", "one"),
                    page_json("22222222222222222222222222222222", "two"),
                ],
                Some("cursor-2"),
            ),
            Some("cursor-2") => list_json(
                vec![page_json("33333333333333333333333333333333", "three")],
                None,
            ),
            Some(other) => panic!("unexpected cursor {}", other),
        };
        (StatusCode::OK, reply.to_string())
    });

    let rows = client(transport.clone())
        .query_database_all(&id(DATABASE_ID), &DatabaseQuery::new())
        .await
        .unwrap();

    let titles: Vec<String> = rows.iter().map(|p| p.title()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(body_of(&requests[0]), json!({"page_size": 100}));
    assert_eq!(
        body_of(&requests[1]),
        json!({"start_cursor": "cursor-2", "page_size": 100})
    );
}

#[tokio::test]
async fn create_page_in_database_sets_parent() {
    let transport = MockTransport::replying(StatusCode::OK, page_json(PAGE_ID_DASHED, "New"));
    let properties = PageProperties::new()
        .with("Status", query_select("Done"))
        .with("Score", query_number(4.5));

    let page = client(transport.clone())
        .create_page_in_database(&id(DATABASE_ID), properties)
        .await
        .unwrap();
    assert_eq!(page.title(), "New");

    let request = transport.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, format!("{}/pages", BASE_URL));
    assert_eq!(
        body_of(&request),
        json!({
            "parent": {"database_id": dashed(DATABASE_ID)},
            "properties": {
                "Status": {"select": {"name": "Done"}},
                "Score": {"number": 4.5}
            }
        })
    );
}

#[tokio::test]
async fn update_page_properties_patches_page() {
    let transport = MockTransport::replying(StatusCode::OK, page_json(PAGE_ID_DASHED, "x"));
    let body = json!({"properties": {"Done": {"checkbox": true}}});
    client(transport.clone())
        .update_page_properties(&id(PAGE_ID), &body)
        .await
        .unwrap();

    let request = transport.only_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.url, format!("{}/pages/{}", BASE_URL, PAGE_ID_DASHED));
    assert_eq!(body_of(&request), body);
}

#[tokio::test]
async fn get_page_content_lists_children() {
    let transport = MockTransport::replying(
        StatusCode::OK,
        list_json(vec![paragraph_json(BLOCK_A, "first line")], None),
    );
    let response = client(transport.clone())
        .get_page_content(&id(PAGE_ID))
        .await
        .unwrap();

    assert_eq!(response.results[0].plain_text(), "first line");
    let request = transport.only_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.url,
        format!("{}/blocks/{}/children", BASE_URL, PAGE_ID_DASHED)
    );
}

#[tokio::test]
async fn get_page_content_all_pages_through_query_string() {
    let transport = MockTransport::new(|request| {
        let reply = if request.url.contains("start_cursor=next") {
            list_json(vec![paragraph_json(BLOCK_B, "two")], None)
        } else {
            list_json(vec![paragraph_json(BLOCK_A, "one")], Some("next"))
        };
        (StatusCode::OK, reply.to_string())
    });

    let blocks = client(transport.clone())
        .get_page_content_all(&id(PAGE_ID))
        .await
        .unwrap();
    let texts: Vec<String> = blocks.iter().map(|b| b.plain_text()).collect();
    assert_eq!(texts, vec!["one", "two"]);

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    let base = format!("{}/blocks/{}/children", BASE_URL, PAGE_ID_DASHED);
    assert_eq!(
        urls,
        vec![
            format!("{}?page_size=100", base),
            format!("{}?page_size=100&start_cursor=next", base),
        ]
    );
}

#[tokio::test]
async fn add_blocks_appends_paragraphs() {
    let transport = MockTransport::replying(
        StatusCode::OK,
        list_json(
            vec![paragraph_json(BLOCK_A, "one"), paragraph_json(BLOCK_B, "two")],
            None,
        ),
    );
    let added = client(transport.clone())
        .add_blocks(&id(PAGE_ID), &new_plain_text_blocks(&["one", "two"]))
        .await
        .unwrap();
    assert_eq!(added.len(), 2);

    let request = transport.only_request();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(
        request.url,
        format!("{}/blocks/{}/children", BASE_URL, PAGE_ID_DASHED)
    );
    assert_eq!(
        body_of(&request),
        json!({"children": [
            {"object": "block", "type": "paragraph", "paragraph": {"rich_text": [
                {"type": "text", "text": {"content": "one", "link": null}}
            ]}},
            {"object": "block", "type": "paragraph", "paragraph": {"rich_text": [
                {"type": "text", "text": {"content": "two", "link": null}}
            ]}}
        ]})
    );
}

#[tokio::test]
async fn get_and_update_block() {
    let transport = MockTransport::replying(StatusCode::OK, paragraph_json(BLOCK_A, "edited"));
    let client = client(transport.clone());

    let block = client.get_block(&id(BLOCK_A)).await.unwrap();
    assert_eq!(block.block_type, "paragraph");

    client
        .update_block(&id(BLOCK_A), &update_plain_text_block("edited"))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].url, format!("{}/blocks/{}", BASE_URL, dashed(BLOCK_A)));
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[1].url, requests[0].url);
    assert_eq!(
        body_of(&requests[1]),
        json!({"paragraph": {"rich_text": [{"text": {"content": "edited"}}]}})
    );
}

#[tokio::test]
async fn delete_blocks_reports_each_result_in_order() {
    let transport = MockTransport::new(|request| {
        if request.url.ends_with(&dashed(BLOCK_B)) {
            (
                StatusCode::NOT_FOUND,
                error_body("object_not_found", "Could not find block").to_string(),
            )
        } else {
            let raw = request.url.rsplit('/').next().unwrap().replace('-', "");
            let mut block = paragraph_json(&raw, "gone");
            block["archived"] = json!(true);
            (StatusCode::OK, block.to_string())
        }
    });

    let ids = vec![id(BLOCK_A), id(BLOCK_B), id(BLOCK_C)];
    let results = client(transport.clone()).delete_blocks(&ids).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().id.as_str(), BLOCK_A);
    assert!(results[0].as_ref().unwrap().archived);
    match &results[1] {
        Err(err @ AppError::NotionService { .. }) => {
            assert_eq!(err.to_string(), "delete_blocks: Could not find block");
        }
        other => panic!("expected a Notion error, got {:?}", other),
    }
    assert_eq!(results[2].as_ref().unwrap().id.as_str(), BLOCK_C);

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.method == Method::DELETE));
}

#[tokio::test]
async fn delete_blocks_with_no_ids_sends_nothing() {
    let transport = MockTransport::replying(StatusCode::OK, json!({}));
    let results = client(transport.clone()).delete_blocks(&[]).await;

    assert!(results.is_empty());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn non_json_gateway_error_maps_to_http_status() {
    let transport = MockTransport::new(|_| {
        (StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>".to_string())
    });
    let err = client(transport).get_block(&id(BLOCK_A)).await.unwrap_err();

    assert_eq!(err.notion_code(), Some(&NotionErrorCode::HttpStatus(502)));
    assert!(err.notion_code().unwrap().is_retryable());
}

#[tokio::test]
async fn unexpected_shape_is_malformed_response() {
    let transport = MockTransport::replying(StatusCode::OK, json!({"object": "page"}));
    let err = client(transport).get_page(&id(PAGE_ID)).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::MalformedResponse {
            operation: "get_page",
            ..
        }
    ));
}

#[tokio::test]
async fn endless_pagination_fails_instead_of_truncating() {
    let transport = MockTransport::replying(
        StatusCode::OK,
        list_json(vec![page_json(PAGE_ID_DASHED, "again")], Some("more")),
    );
    let err = client(transport.clone())
        .query_database_all(&id(DATABASE_ID), &DatabaseQuery::new())
        .await
        .unwrap_err();

    match err {
        AppError::PaginationIncomplete { rounds, fetched } => {
            assert_eq!(rounds, 1000);
            assert_eq!(fetched, 1000);
        }
        other => panic!("expected PaginationIncomplete, got {:?}", other),
    }
    assert_eq!(transport.requests().len(), 1000);
}

#[tokio::test]
async fn block_cursor_is_form_encoded() {
    let cursor = "a&page_size=1#x";
    let transport = MockTransport::new(move |request| {
        let reply = if request.url.contains("start_cursor=") {
            list_json(vec![paragraph_json(BLOCK_B, "two")], None)
        } else {
            list_json(vec![paragraph_json(BLOCK_A, "one")], Some(cursor))
        };
        (StatusCode::OK, reply.to_string())
    });

    let blocks = client(transport.clone())
        .get_page_content_all(&id(PAGE_ID))
        .await
        .unwrap();
    assert_eq!(blocks.len(), 2);

    let second = reqwest::Url::parse(&transport.requests()[1].url).unwrap();
    assert_eq!(second.fragment(), None);
    let pairs: Vec<(String, String)> = second.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("page_size".to_string(), "100".to_string()),
            ("start_cursor".to_string(), cursor.to_string()),
        ]
    );
}

// src/api/databases.rs
//! Database operations.

use super::client::NotionClient;
use super::pagination::fetch_all_pages;
use crate::error::AppError;
use crate::model::{Page, QueryDatabaseResponse};
use crate::request::DatabaseQuery;
use crate::types::NotionId;
use reqwest::Method;

impl NotionClient {
    /// `POST /databases/{id}/query`
    ///
    /// Without a query no body is sent and Notion returns the first page of
    /// rows unfiltered.
    ///
    /// Docs: <https://developers.notion.com/reference/post-database-query>
    pub async fn query_database(
        &self,
        database_id: &NotionId,
        query: Option<&DatabaseQuery>,
    ) -> Result<QueryDatabaseResponse, AppError> {
        let path = format!("databases/{}/query", database_id.to_hyphenated());
        let body = query.map(Self::encode).transpose()?;
        let response: QueryDatabaseResponse = self
            .request("query_database", Method::POST, &path, body)
            .await?;

        log::info!(
            "Queried database {}: {} row(s), has_more={}",
            database_id,
            response.results.len(),
            response.has_more
        );
        Ok(response)
    }

    /// Every row matching `query`, following pagination cursors.
    pub async fn query_database_all(
        &self,
        database_id: &NotionId,
        query: &DatabaseQuery,
    ) -> Result<Vec<Page>, AppError> {
        fetch_all_pages(|page_size, cursor| {
            let query = query
                .clone()
                .with_page_size(page_size)
                .with_cursor(cursor);
            async move { self.query_database(database_id, Some(&query)).await }
        })
        .await
    }
}

// src/api/blocks.rs
//! Block operations.

use super::client::NotionClient;
use super::pagination::fetch_all_pages;
use crate::error::AppError;
use crate::model::{Block, ListBlockChildrenResponse};
use crate::types::NotionId;
use futures::future::join_all;
use reqwest::Method;
use serde::Serialize;

impl NotionClient {
    /// `GET /blocks/{id}/children`: the first page of a page's blocks.
    ///
    /// Docs: <https://developers.notion.com/reference/get-block-children>
    pub async fn get_page_content(
        &self,
        page_id: &NotionId,
    ) -> Result<ListBlockChildrenResponse, AppError> {
        let path = format!("blocks/{}/children", page_id.to_hyphenated());
        self.request("get_page_content", Method::GET, &path, None)
            .await
    }

    /// Every child block of `page_id`, following pagination cursors.
    pub async fn get_page_content_all(&self, page_id: &NotionId) -> Result<Vec<Block>, AppError> {
        let path = format!("blocks/{}/children", page_id.to_hyphenated());
        fetch_all_pages(|page_size, cursor| {
            let path = &path;
            async move {
                let page_size = page_size.to_string();
                let mut query = vec![("page_size", page_size.as_str())];
                if let Some(cursor) = cursor.as_deref() {
                    query.push(("start_cursor", cursor));
                }
                self.request_with_query("get_page_content", Method::GET, path, &query, None)
                    .await
            }
        })
        .await
    }

    /// `GET /blocks/{id}`
    ///
    /// Docs: <https://developers.notion.com/reference/retrieve-a-block>
    pub async fn get_block(&self, block_id: &NotionId) -> Result<Block, AppError> {
        let path = format!("blocks/{}", block_id.to_hyphenated());
        self.request("get_block", Method::GET, &path, None).await
    }

    /// `PATCH /blocks/{id}/children`, returning the appended blocks.
    ///
    /// Docs: <https://developers.notion.com/reference/patch-block-children>
    pub async fn add_blocks<B>(&self, page_id: &NotionId, body: &B) -> Result<Vec<Block>, AppError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("blocks/{}/children", page_id.to_hyphenated());
        let response: ListBlockChildrenResponse = self
            .request("add_blocks", Method::PATCH, &path, Some(Self::encode(body)?))
            .await?;
        log::info!(
            "Appended {} block(s) to {}",
            response.results.len(),
            page_id
        );
        Ok(response.results)
    }

    /// `PATCH /blocks/{id}`
    ///
    /// Docs: <https://developers.notion.com/reference/update-a-block>
    pub async fn update_block<B>(&self, block_id: &NotionId, body: &B) -> Result<Block, AppError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("blocks/{}", block_id.to_hyphenated());
        self.request("update_block", Method::PATCH, &path, Some(Self::encode(body)?))
            .await
    }

    /// `DELETE /blocks/{id}` for every id, concurrently.
    ///
    /// Results come back in input order, one per id; a failed delete does not
    /// abort the others.
    ///
    /// Docs: <https://developers.notion.com/reference/delete-a-block>
    pub async fn delete_blocks(&self, block_ids: &[NotionId]) -> Vec<Result<Block, AppError>> {
        let results = join_all(block_ids.iter().map(|id| async move {
            let path = format!("blocks/{}", id.to_hyphenated());
            self.request::<Block>("delete_blocks", Method::DELETE, &path, None)
                .await
        }))
        .await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            log::warn!("{} of {} block deletion(s) failed", failed, results.len());
        } else {
            log::info!("Deleted {} block(s)", results.len());
        }
        results
    }
}

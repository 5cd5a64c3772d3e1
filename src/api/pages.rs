// src/api/pages.rs
//! Page operations.

use super::client::NotionClient;
use crate::error::AppError;
use crate::model::Page;
use crate::request::{CreateDatabasePage, DatabaseParent, PageProperties};
use crate::types::NotionId;
use reqwest::Method;
use serde::Serialize;

impl NotionClient {
    /// `POST /pages` with a caller-built body (parent, properties, children...).
    ///
    /// Docs: <https://developers.notion.com/reference/post-page>
    pub async fn create_page<B>(&self, body: &B) -> Result<Page, AppError>
    where
        B: Serialize + ?Sized,
    {
        let page: Page = self
            .request("create_page", Method::POST, "pages", Some(Self::encode(body)?))
            .await?;
        log::info!("Created page {}", page.id);
        Ok(page)
    }

    /// `POST /pages` creating a row in `database_id`.
    pub async fn create_page_in_database(
        &self,
        database_id: &NotionId,
        properties: PageProperties,
    ) -> Result<Page, AppError> {
        let body = CreateDatabasePage {
            parent: DatabaseParent {
                database_id: database_id.to_hyphenated(),
            },
            properties,
        };
        self.create_page(&body).await
    }

    /// `GET /pages/{id}`: the page's properties, not its content.
    ///
    /// Docs: <https://developers.notion.com/reference/retrieve-a-page>
    pub async fn get_page(&self, page_id: &NotionId) -> Result<Page, AppError> {
        let path = format!("pages/{}", page_id.to_hyphenated());
        self.request("get_page", Method::GET, &path, None).await
    }

    /// `PATCH /pages/{id}`
    ///
    /// Docs: <https://developers.notion.com/reference/patch-page>
    pub async fn update_page_properties<B>(
        &self,
        page_id: &NotionId,
        body: &B,
    ) -> Result<Page, AppError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("pages/{}", page_id.to_hyphenated());
        let page: Page = self
            .request(
                "update_page_properties",
                Method::PATCH,
                &path,
                Some(Self::encode(body)?),
            )
            .await?;
        log::info!("Updated properties of page {}", page.id);
        Ok(page)
    }
}

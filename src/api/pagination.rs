// src/api/pagination.rs
//! Cursor-following loop shared by the `*_all` helpers.

use crate::constants::{NOTION_API_PAGE_SIZE, NOTION_MAX_PAGINATION_ROUNDS};
use crate::error::AppError;
use crate::model::PaginatedList;

/// Fetches pages until `has_more` is false, concatenating `results`.
///
/// `fetch_fn` receives the page size and the cursor of the previous page.
/// Fails with [`AppError::PaginationIncomplete`] rather than returning a
/// truncated list when Notion still reports more after
/// `NOTION_MAX_PAGINATION_ROUNDS` requests.
pub async fn fetch_all_pages<T, F, Fut>(fetch_fn: F) -> Result<Vec<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedList<T>, AppError>>,
{
    fetch_pages_capped(NOTION_MAX_PAGINATION_ROUNDS, fetch_fn).await
}

async fn fetch_pages_capped<T, F, Fut>(
    max_rounds: u32,
    mut fetch_fn: F,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedList<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut rounds = 0u32;

    loop {
        if rounds >= max_rounds {
            log::warn!(
                "Giving up after {} rounds ({} items) with more results pending",
                rounds,
                all_items.len()
            );
            return Err(AppError::PaginationIncomplete {
                rounds,
                fetched: all_items.len(),
            });
        }

        let response = fetch_fn(NOTION_API_PAGE_SIZE, cursor).await?;
        rounds += 1;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!("Fetched {} items in {} round(s)", all_items.len(), rounds);
    Ok(all_items)
}

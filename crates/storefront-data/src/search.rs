//! Product search endpoint.

use async_trait::async_trait;
use storefront_commerce::catalog::Product;
use storefront_commerce::search::SearchRequest;

use crate::client::FetchClient;
use crate::error::FetchError;

/// Path of the search endpoint.
pub const SEARCH_PATH: &str = "/api/search";

/// Source of product search results.
///
/// Returns the full, unpaginated list of matches; paging happens on the
/// caller's side.
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Product>, FetchError>;
}

#[async_trait]
impl SearchClient for FetchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Product>, FetchError> {
        self.get_json(SEARCH_PATH, request).await
    }
}

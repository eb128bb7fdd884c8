//! Rating endpoints: existing ratings and rating submission.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_commerce::ids::ProductId;
use storefront_commerce::rating::UserRating;

use crate::client::FetchClient;
use crate::error::FetchError;

/// Path listing the user's existing ratings.
pub const RATINGS_PATH: &str = "/api/ratings";
/// Path ratings are submitted to.
pub const RATE_PATH: &str = "/api/rate";

const NO_QUERY: &[(&str, &str)] = &[];

/// Body of a rating submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSubmission {
    pub product_id: ProductId,
    pub rating: u8,
}

/// Loads and submits product ratings.
#[async_trait]
pub trait RatingsClient: Send + Sync {
    async fn load_ratings(&self) -> Result<Vec<UserRating>, FetchError>;

    async fn submit_rating(&self, submission: &RatingSubmission) -> Result<(), FetchError>;
}

#[async_trait]
impl RatingsClient for FetchClient {
    async fn load_ratings(&self) -> Result<Vec<UserRating>, FetchError> {
        self.get_json(RATINGS_PATH, NO_QUERY).await
    }

    async fn submit_rating(&self, submission: &RatingSubmission) -> Result<(), FetchError> {
        self.post_json(RATE_PATH, submission).await
    }
}

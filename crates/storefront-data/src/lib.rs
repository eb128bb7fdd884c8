//! HTTP access to the storefront API.
//!
//! This crate provides:
//! - `FetchClient` - reqwest client bound to the API base URL
//! - `SearchClient` - `GET /api/search`, returning the full match list
//! - `RatingsClient` - `GET /api/ratings` and `POST /api/rate`
//! - `TimeoutConfig` - connect/total timeouts
//!
//! The traits are the seam the session runtime is generic over, so tests
//! can substitute in-memory implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{FetchClient, SearchClient, TimeoutConfig};
//! use storefront_commerce::search::QueryState;
//!
//! let client = FetchClient::new("http://localhost:5000", TimeoutConfig::default())?;
//! let products = client.search(&QueryState::default().to_request()).await?;
//! ```

mod client;
mod error;
mod ratings;
mod search;
mod timeout;

pub use client::FetchClient;
pub use error::FetchError;
pub use ratings::{RatingSubmission, RatingsClient, RATE_PATH, RATINGS_PATH};
pub use storefront_commerce::rating::UserRating;
pub use search::{SearchClient, SEARCH_PATH};
pub use timeout::TimeoutConfig;

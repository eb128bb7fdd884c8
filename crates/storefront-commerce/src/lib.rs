//! Storefront domain types and logic.
//!
//! This crate holds the state behind the storefront page, with no I/O and
//! no rendering:
//!
//! - **Catalog**: products as the search endpoint returns them
//! - **Cart**: the in-memory cart store with quantity merge and totals
//! - **Search**: query state, request building, client-side pagination
//! - **Rating**: the star-rating widget selection
//! - **Notice**: transient alerts
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mug = Product::new(1, "Mug", Money::from_decimal(10.0));
//!
//! let mut cart = Cart::new();
//! cart.add(&mug, 1);
//! cart.add(&mug, 2);
//! assert_eq!(cart.total_price().display(), "$30.00");
//!
//! let items: Vec<u32> = (1..=25).collect();
//! let page = paginate(&items, 2, 12);
//! assert_eq!(page.page_count, 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod notice;
pub mod rating;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::Product;

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Search
    pub use crate::search::{
        paginate, Page, PageLink, Pagination, PriceDefaults, QueryState, SearchRequest, SortKey,
        ViewMode,
    };

    // Rating
    pub use crate::rating::{highlight, RatingSelection, StarState, UserRating, MAX_RATING};

    // Notices
    pub use crate::notice::{Notice, NoticeKind, Notices};
}

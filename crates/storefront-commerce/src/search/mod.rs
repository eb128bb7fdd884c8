//! Search module.
//!
//! Contains the query state behind the product list, the request it
//! produces, and client-side pagination of the results.

mod pagination;
mod query;

pub use pagination::{page_count, paginate, Page, PageLink, Pagination};
pub use query::{
    parse_int_prefix, PriceDefaults, QueryState, SearchRequest, SortKey, ViewMode,
    ALL_PRODUCTS_LABEL, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE,
};

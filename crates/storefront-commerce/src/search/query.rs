//! Query state and search request builder.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower price bound used when the min input is empty or unparsable.
pub const DEFAULT_MIN_PRICE: i64 = 0;
/// Upper price bound used when the max input is empty, zero or unparsable.
pub const DEFAULT_MAX_PRICE: i64 = 1000;
/// Products shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Label shown when no category is selected.
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Sort by relevance (server default).
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by newest first.
    Newest,
    /// Sort by name A-Z.
    NameAsc,
}

impl SortKey {
    /// All options, in the order the sort dropdown lists them.
    pub const ALL: [SortKey; 6] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
        SortKey::Newest,
        SortKey::NameAsc,
    ];

    /// Parse a wire name; unknown names fall back to relevance.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "rating" => Self::Rating,
            "newest" => Self::Newest,
            "name_asc" => Self::NameAsc,
            _ => Self::Relevance,
        }
    }

    /// Wire name sent to the search endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::NameAsc => "name_asc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Newest => "Newest Arrivals",
            Self::NameAsc => "Name: A-Z",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product list layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Multi-column grid.
    #[default]
    Grid,
    /// Single-column list.
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Grid, ViewMode::List];

    /// Parse a view name ("grid" or "list").
    pub fn parse(s: &str) -> Result<Self, CommerceError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(CommerceError::UnknownViewMode(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    /// Layout class applied to the product grid container.
    pub fn grid_class(&self) -> &'static str {
        match self {
            Self::Grid => "row row-cols-1 row-cols-md-3 g-4",
            Self::List => "row row-cols-1 g-4",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback bounds for the price filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceDefaults {
    pub min: i64,
    pub max: i64,
}

impl Default for PriceDefaults {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_PRICE,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

/// Parameters sent to the search endpoint.
///
/// Serializes to `query=&category=&sort=&min_price=&max_price=`. Paging
/// is applied client-side, so no page parameters are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub category: String,
    pub sort: SortKey,
    pub min_price: i64,
    pub max_price: i64,
}

/// The combined search, filter, sort and paging state of the product list.
///
/// Price bounds are kept as the raw text of the min/max inputs and parsed
/// when a request is built, so a half-typed value never blocks a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub text: String,
    pub category: String,
    pub sort: SortKey,
    pub min_price_input: String,
    pub max_price_input: String,
    pub price_slider: i64,
    pub page: usize,
    pub page_size: usize,
    pub view: ViewMode,
    pub price_defaults: PriceDefaults,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, PriceDefaults::default())
    }
}

impl QueryState {
    /// Create the initial state: no filters, page 1, grid view.
    pub fn new(page_size: usize, price_defaults: PriceDefaults) -> Self {
        Self {
            text: String::new(),
            category: String::new(),
            sort: SortKey::default(),
            min_price_input: String::new(),
            max_price_input: String::new(),
            price_slider: price_defaults.max,
            page: 1,
            page_size: page_size.max(1),
            view: ViewMode::default(),
            price_defaults,
        }
    }

    /// Set the free-text query.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the category filter and go back to the first page.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    /// Label for the current category.
    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            ALL_PRODUCTS_LABEL
        } else {
            &self.category
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Move the price slider: the range becomes `0..=value`.
    pub fn set_price_slider(&mut self, value: i64) {
        self.price_slider = value;
        self.min_price_input = "0".to_string();
        self.max_price_input = value.to_string();
    }

    /// Edit the min/max inputs; the slider follows the max value.
    pub fn set_price_inputs(&mut self, min: impl Into<String>, max: impl Into<String>) {
        self.min_price_input = min.into();
        self.max_price_input = max.into();
        self.price_slider = self.max_price();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Effective lower price bound.
    pub fn min_price(&self) -> i64 {
        parse_int_prefix(&self.min_price_input).unwrap_or(self.price_defaults.min)
    }

    /// Effective upper price bound. A max of zero counts as unset.
    pub fn max_price(&self) -> i64 {
        parse_int_prefix(&self.max_price_input)
            .filter(|v| *v != 0)
            .unwrap_or(self.price_defaults.max)
    }

    /// Build the request for the current state.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.text.clone(),
            category: self.category.clone(),
            sort: self.sort,
            min_price: self.min_price(),
            max_price: self.max_price(),
        }
    }
}

/// Parse the leading integer of a string, the way a lenient numeric input
/// reads: leading whitespace, an optional sign, then digits. Trailing text
/// is ignored. Returns `None` when no digits lead the string.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let value = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = QueryState::default();
        let req = state.to_request();
        assert_eq!(req.min_price, 0);
        assert_eq!(req.max_price, 1000);
        assert_eq!(req.sort, SortKey::Relevance);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, 12);
        assert_eq!(state.category_label(), "All Products");
    }

    #[test]
    fn test_category_change_resets_page() {
        let mut state = QueryState::default();
        state.set_page(4);
        state.set_category("Books");
        assert_eq!(state.page, 1);
        assert_eq!(state.category_label(), "Books");

        state.set_category("");
        assert_eq!(state.category_label(), "All Products");
    }

    #[test]
    fn test_slider_sets_range_from_zero() {
        let mut state = QueryState::default();
        state.set_price_inputs("40", "90");
        state.set_price_slider(250);
        assert_eq!(state.min_price(), 0);
        assert_eq!(state.max_price(), 250);
        assert_eq!(state.min_price_input, "0");
        assert_eq!(state.max_price_input, "250");
    }

    #[test]
    fn test_inputs_move_slider_to_max() {
        let mut state = QueryState::default();
        state.set_price_inputs("15", "120");
        assert_eq!(state.price_slider, 120);
        assert_eq!(state.min_price(), 15);

        state.set_price_inputs("15", "oops");
        assert_eq!(state.price_slider, 1000);
    }

    #[test]
    fn test_unparsable_prices_fall_back() {
        let mut state = QueryState::default();
        state.set_price_inputs("abc", "");
        assert_eq!(state.min_price(), 0);
        assert_eq!(state.max_price(), 1000);

        state.set_price_inputs("  12.5", "300usd");
        assert_eq!(state.min_price(), 12);
        assert_eq!(state.max_price(), 300);

        state.set_price_inputs("5", "0");
        assert_eq!(state.max_price(), 1000);
    }

    #[test]
    fn test_custom_price_defaults() {
        let state = QueryState::new(24, PriceDefaults { min: 10, max: 500 });
        let req = state.to_request();
        assert_eq!((req.min_price, req.max_price), (10, 500));
        assert_eq!(state.price_slider, 500);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix(" -7x"), Some(-7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("x1"), None);
    }

    #[test]
    fn test_sort_key_wire_names() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("bogus"), SortKey::Relevance);

        let json = serde_json::to_string(&SortKey::PriceDesc).unwrap();
        assert_eq!(json, "\"price_desc\"");
    }

    #[test]
    fn test_view_mode() {
        assert_eq!(ViewMode::parse("List").unwrap(), ViewMode::List);
        assert!(ViewMode::parse("carousel").is_err());
        assert_eq!(ViewMode::Grid.grid_class(), "row row-cols-1 row-cols-md-3 g-4");
        assert_eq!(ViewMode::List.grid_class(), "row row-cols-1 g-4");
    }
}

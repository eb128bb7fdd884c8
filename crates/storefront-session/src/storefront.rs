//! The storefront controller.
//!
//! `Storefront` owns every piece of page state. Its methods are synchronous
//! state transitions that return the [`Effect`]s (fetches) the caller must
//! run; results come back through [`Storefront::complete`]. Time is always
//! passed in, so the controller never reads a clock on its own.

use storefront_commerce::cart::Cart;
use storefront_commerce::catalog::Product;
use storefront_commerce::notice::{Notice, NoticeKind, Notices};
use storefront_commerce::rating::{RatingSelection, UserRating};
use storefront_commerce::search::{
    page_count, paginate, Pagination, QueryState, SearchRequest, SortKey, ViewMode,
};
use storefront_commerce::ProductId;
use storefront_data::{FetchError, RatingSubmission};
use storefront_view::sections::{
    product_grid_class, render_cart_count, render_cart_items, render_cart_total,
    render_category_label, render_loading, render_notices, render_pagination,
    render_price_filter, render_product_count, render_product_grid, render_rating_stars,
    render_search_error, render_sort_options, render_user_ratings, render_view_buttons,
};
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::clock::SessionClock;
use crate::config::SessionConfig;
use crate::debounce::Debouncer;
use crate::event::Event;
use crate::page::Page;

pub const ADDED_TO_CART: &str = "Product added to cart";
pub const RATING_SUBMITTED: &str = "Rating submitted successfully";
pub const SELECT_RATING: &str = "Please select a rating";
pub const RATING_FAILED: &str = "Error submitting rating";
pub const RATINGS_LOAD_FAILED: &str = "Error loading ratings";
pub const PRODUCT_NOT_LOADED: &str = "Product is not in the current results";

/// A search to run, tagged with the generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub request: SearchRequest,
}

/// Work the controller asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Search(SearchTicket),
    LoadRatings,
    SubmitRating(RatingSubmission),
}

/// The outcome of an [`Effect`], fed back into the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Search {
        generation: u64,
        result: Result<Vec<Product>, FetchError>,
    },
    RatingsLoaded(Result<Vec<UserRating>, FetchError>),
    RatingSubmitted {
        submission: RatingSubmission,
        result: Result<(), FetchError>,
    },
}

/// What the product area currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsStatus {
    /// No search has been issued yet.
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Controller state for one storefront page.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: SessionConfig,
    clock: SessionClock,
    query: QueryState,
    cart: Cart,
    cart_open: bool,
    rating: RatingSelection,
    notices: Notices,
    results: Vec<Product>,
    status: ResultsStatus,
    user_ratings: Vec<UserRating>,
    ratings_loading: bool,
    debounce: Debouncer,
    issued: u64,
    applied: u64,
}

impl Storefront {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_clock(config, SessionClock::start())
    }

    pub fn with_clock(config: SessionConfig, clock: SessionClock) -> Self {
        Self {
            query: QueryState::new(config.page_size, config.price_defaults),
            notices: Notices::with_ttl(config.notice_ttl_delta()),
            debounce: Debouncer::new(config.debounce),
            cart: Cart::new(),
            cart_open: false,
            rating: RatingSelection::new(),
            results: Vec::new(),
            status: ResultsStatus::Idle,
            user_ratings: Vec::new(),
            ratings_loading: false,
            issued: 0,
            applied: 0,
            clock,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn rating(&self) -> &RatingSelection {
        &self.rating
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    /// The full, unpaginated result list of the last applied search.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn status(&self) -> ResultsStatus {
        self.status
    }

    pub fn user_ratings(&self) -> &[UserRating] {
        &self.user_ratings
    }

    /// Generation of the most recently issued search.
    pub fn issued_generation(&self) -> u64 {
        self.issued
    }

    /// Generation of the most recently applied search response.
    pub fn applied_generation(&self) -> u64 {
        self.applied
    }

    /// Whether a debounced text search is waiting to fire.
    pub fn has_pending_search(&self) -> bool {
        self.debounce.is_pending()
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// Effects to run when the page opens: existing ratings and the
    /// initial search, concurrently.
    pub fn start(&mut self) -> Vec<Effect> {
        vec![self.load_ratings(), Effect::Search(self.search())]
    }

    /// Apply a UI event.
    pub fn handle(&mut self, event: Event, now: Instant) -> Vec<Effect> {
        match event {
            Event::TextInput(text) => {
                self.text_input(text, now);
                Vec::new()
            }
            Event::CategoryChanged(category) => {
                vec![Effect::Search(self.change_category(category))]
            }
            Event::SortChanged(sort) => vec![Effect::Search(self.change_sort(sort))],
            Event::PriceSlider(value) => vec![Effect::Search(self.set_price_slider(value))],
            Event::PriceInputs { min, max } => {
                vec![Effect::Search(self.set_price_inputs(min, max))]
            }
            Event::ChangePage(page) => self
                .change_page(page)
                .map(Effect::Search)
                .into_iter()
                .collect(),
            Event::SwitchView(view) => vec![Effect::Search(self.switch_view(view))],
            Event::AddToCart { id, quantity } => {
                self.add_to_cart(id, quantity, now);
                Vec::new()
            }
            Event::SetQuantity { id, quantity } => {
                self.set_quantity(id, quantity);
                Vec::new()
            }
            Event::RemoveFromCart(id) => {
                self.remove_from_cart(id);
                Vec::new()
            }
            Event::ToggleCart => {
                self.toggle_cart();
                Vec::new()
            }
            Event::HoverRating(value) => {
                self.hover_rating(value);
                Vec::new()
            }
            Event::LeaveRating => {
                self.leave_rating();
                Vec::new()
            }
            Event::SetRating(value) => {
                self.set_rating(value);
                Vec::new()
            }
            Event::SubmitRating(id) => self
                .submit_rating(id, now)
                .map(Effect::SubmitRating)
                .into_iter()
                .collect(),
            Event::LoadRatings => vec![self.load_ratings()],
            Event::Refresh => vec![Effect::Search(self.search())],
        }
    }

    /// Issue a search for the current query state.
    ///
    /// Cancels any pending debounced search and shows the loading
    /// indicator until a response is applied.
    pub fn search(&mut self) -> SearchTicket {
        if self.debounce.cancel() {
            debug!("pending text search superseded");
        }

        self.issued += 1;
        self.status = ResultsStatus::Loading;

        let request = self.query.to_request();
        info!(
            generation = self.issued,
            query = %request.query,
            category = %request.category,
            sort = %request.sort,
            min_price = request.min_price,
            max_price = request.max_price,
            page = self.query.page,
            "search issued"
        );

        SearchTicket {
            generation: self.issued,
            request,
        }
    }

    /// Record a keystroke. The search runs once the debounce window passes
    /// with no further input.
    pub fn text_input(&mut self, text: impl Into<String>, now: Instant) {
        self.query.set_text(text);
        self.debounce.trigger(now);
        debug!(text = %self.query.text, "search debounced");
    }

    /// Change the category, reset to page 1 and search immediately.
    pub fn change_category(&mut self, category: impl Into<String>) -> SearchTicket {
        self.query.set_category(category);
        self.search()
    }

    pub fn change_sort(&mut self, sort: SortKey) -> SearchTicket {
        self.query.set_sort(sort);
        self.search()
    }

    /// Move the price slider: the range becomes `0..=value`.
    pub fn set_price_slider(&mut self, value: i64) -> SearchTicket {
        self.query.set_price_slider(value);
        self.search()
    }

    /// Edit the min/max inputs; the slider follows the effective max.
    pub fn set_price_inputs(
        &mut self,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> SearchTicket {
        self.query.set_price_inputs(min, max);
        self.search()
    }

    /// Go to `page` and refetch.
    ///
    /// Pages a disabled Previous/Next link would lead to are ignored: page
    /// 0, and pages past the end once results are loaded.
    pub fn change_page(&mut self, page: usize) -> Option<SearchTicket> {
        let last = page_count(self.results.len(), self.query.page_size).max(1);
        if page == 0 || (self.status == ResultsStatus::Ready && page > last) {
            debug!(page, last, "page change ignored");
            return None;
        }

        self.query.set_page(page);
        Some(self.search())
    }

    /// Switch between grid and list and refetch.
    pub fn switch_view(&mut self, view: ViewMode) -> SearchTicket {
        self.query.set_view(view);
        self.search()
    }

    /// Add a product from the current results to the cart.
    ///
    /// Returns false, and raises a warning notice, when `id` is not among
    /// the loaded results (for example before the first search resolves).
    pub fn add_to_cart(&mut self, id: ProductId, quantity: u32, now: Instant) -> bool {
        let Some(product) = self.results.iter().find(|p| p.id == id).cloned() else {
            warn!(product_id = %id, status = ?self.status, "add to cart: product not in results");
            self.notify(PRODUCT_NOT_LOADED, NoticeKind::Warning, now);
            return false;
        };
        self.add_product(&product, quantity, now);
        true
    }

    /// Add `quantity` units of `product` and raise the confirmation notice.
    pub fn add_product(&mut self, product: &Product, quantity: u32, now: Instant) {
        let total = self.cart.add(product, quantity);
        debug!(product_id = %product.id, quantity, total, "added to cart");
        self.notify(ADDED_TO_CART, NoticeKind::Success, now);
    }

    /// Set a cart line's quantity; below 1 removes it.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        self.cart.set_quantity(id, quantity)
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.cart.remove(id)
    }

    /// Open or close the cart sidebar.
    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    pub fn hover_rating(&mut self, value: u8) {
        self.rating.hover(value);
    }

    pub fn leave_rating(&mut self) {
        self.rating.leave();
    }

    pub fn set_rating(&mut self, value: u8) {
        self.rating.set(value);
    }

    /// Build the submission for the committed rating.
    ///
    /// With no star selected, raises a warning notice and returns `None`.
    pub fn submit_rating(&mut self, product_id: ProductId, now: Instant) -> Option<RatingSubmission> {
        match self.rating.submittable() {
            Ok(rating) => {
                info!(product_id = %product_id, rating, "submitting rating");
                Some(RatingSubmission { product_id, rating })
            }
            Err(e) => {
                warn!(product_id = %product_id, error = %e, "rating rejected");
                self.notify(SELECT_RATING, NoticeKind::Warning, now);
                None
            }
        }
    }

    /// Request the user's existing ratings.
    pub fn load_ratings(&mut self) -> Effect {
        self.ratings_loading = true;
        Effect::LoadRatings
    }

    // ------------------------------------------------------------------
    // Completions and timers
    // ------------------------------------------------------------------

    /// Feed back the result of an effect.
    pub fn complete(&mut self, completion: Completion, now: Instant) -> Vec<Effect> {
        match completion {
            Completion::Search { generation, result } => {
                self.apply_search_result(generation, result);
                Vec::new()
            }
            Completion::RatingsLoaded(result) => {
                self.ratings_loading = false;
                match result {
                    Ok(ratings) => {
                        debug!(count = ratings.len(), "ratings loaded");
                        self.user_ratings = ratings;
                    }
                    Err(e) => {
                        error!(error = %e, "loading ratings failed");
                        self.notify(RATINGS_LOAD_FAILED, NoticeKind::Danger, now);
                    }
                }
                Vec::new()
            }
            Completion::RatingSubmitted { submission, result } => match result {
                Ok(()) => {
                    info!(product_id = %submission.product_id, rating = submission.rating, "rating submitted");
                    self.rating.reset();
                    self.notify(RATING_SUBMITTED, NoticeKind::Success, now);
                    vec![self.load_ratings()]
                }
                Err(e) => {
                    error!(product_id = %submission.product_id, error = %e, "rating submission failed");
                    self.notify(RATING_FAILED, NoticeKind::Danger, now);
                    Vec::new()
                }
            },
        }
    }

    /// Apply a search response. Returns false if it was discarded as stale.
    pub fn apply_search_result(
        &mut self,
        generation: u64,
        result: Result<Vec<Product>, FetchError>,
    ) -> bool {
        if self.config.discard_stale_responses && generation < self.applied {
            debug!(generation, applied = self.applied, "stale search response discarded");
            return false;
        }
        self.applied = generation;

        match result {
            Ok(products) => {
                info!(generation, count = products.len(), "search applied");
                self.results = products;
                self.status = ResultsStatus::Ready;
            }
            Err(e) => {
                error!(generation, error = %e, "search failed");
                self.status = ResultsStatus::Failed;
            }
        }
        true
    }

    /// Fire whatever is due at `now`: the debounced search and notice
    /// expiry.
    pub fn poll_timers(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.debounce.poll(now) {
            effects.push(Effect::Search(self.search()));
        }

        let dropped = self.notices.prune(self.clock.wall_time(now));
        if dropped > 0 {
            debug!(dropped, "notices expired");
        }
        effects
    }

    /// The next instant [`poll_timers`](Self::poll_timers) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let notice = self
            .notices
            .next_expiry()
            .map(|at| self.clock.instant_at(at));

        match (self.debounce.deadline(), notice) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn notify(&mut self, message: &str, kind: NoticeKind, now: Instant) {
        self.notices
            .push(Notice::new(message, kind, self.clock.wall_time(now)));
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Render every page region from the current state.
    pub fn render(&self) -> Page {
        let page_size = self.query.page_size;
        let current = paginate(&self.results, self.query.page, page_size);
        let pagination = Pagination::new(self.query.page, page_size, self.results.len());

        let product_grid = match self.status {
            ResultsStatus::Idle => String::new(),
            ResultsStatus::Loading => render_loading(),
            ResultsStatus::Ready => render_product_grid(current.slice, self.query.view),
            ResultsStatus::Failed => render_search_error(),
        };

        let user_ratings = if self.ratings_loading {
            render_loading()
        } else {
            render_user_ratings(&self.user_ratings)
        };

        Page {
            category_label: render_category_label(&self.query),
            sort_options: render_sort_options(self.query.sort),
            price_filter: render_price_filter(&self.query),
            view_buttons: render_view_buttons(self.query.view),
            grid_class: product_grid_class(self.query.view).to_string(),
            product_count: render_product_count(self.results.len()),
            product_grid,
            pagination: render_pagination(&pagination),
            cart_open: self.cart_open,
            cart_count: render_cart_count(&self.cart),
            cart_items: render_cart_items(&self.cart),
            cart_total: render_cart_total(&self.cart),
            rating_stars: render_rating_stars(&self.rating),
            user_ratings,
            notices: render_notices(&self.notices),
        }
    }
}

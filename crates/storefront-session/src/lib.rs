//! Storefront session: the page controller and the runtime that drives it.
//!
//! - [`Storefront`] - owns cart, query, rating and notice state; turns UI
//!   events into state changes plus the fetches they require
//! - [`spawn`] - runs a `Storefront` on a tokio task, fed by a channel of
//!   [`Event`]s, publishing a rendered [`Page`] after every change
//! - [`Debouncer`] - trailing-edge debounce for the search box
//! - [`parse_script`] - reads scripted sessions, one event per line
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_data::{FetchClient, TimeoutConfig};
//! use storefront_session::{spawn, Event, SessionConfig};
//!
//! let client = Arc::new(FetchClient::new("http://localhost:5000", TimeoutConfig::default())?);
//! let session = spawn(client, SessionConfig::default());
//! session.send(Event::TextInput("lamp".into())).await?;
//! let page = session.finish().await?;
//! println!("{}", page.product_count);
//! ```

mod clock;
mod config;
mod debounce;
mod error;
mod event;
mod page;
mod runtime;
mod storefront;

pub use clock::SessionClock;
pub use config::{SessionConfig, DEFAULT_DEBOUNCE, DEFAULT_EVENT_BUFFER};
pub use debounce::Debouncer;
pub use error::SessionError;
pub use event::{parse_script, Event, ScriptStep};
pub use page::Page;
pub use runtime::{spawn, SessionHandle, StorefrontApi};
pub use storefront::{
    Completion, Effect, ResultsStatus, SearchTicket, Storefront, ADDED_TO_CART,
    PRODUCT_NOT_LOADED, RATINGS_LOAD_FAILED, RATING_FAILED, RATING_SUBMITTED, SELECT_RATING,
};

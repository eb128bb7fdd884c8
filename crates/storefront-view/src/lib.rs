//! Section renderers for the storefront page.
//!
//! Every function here is pure: it takes domain state and returns the HTML
//! fragment for one region of the page. The session layer decides when a
//! region is re-rendered.
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//! use storefront_view::sections::{render_cart_count, render_cart_total};
//!
//! let mut cart = Cart::new();
//! cart.add(&Product::new(1, "Mug", Money::from_decimal(4.5)), 2);
//!
//! assert_eq!(render_cart_count(&cart), "2");
//! assert_eq!(render_cart_total(&cart), "$9.00");
//! ```

mod html;
pub mod sections;

pub use html::html_escape;

//! Product catalog module.
//!
//! Products are supplied by the search endpoint and read-only here.

mod product;

pub use product::Product;

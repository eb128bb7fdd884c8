//! Section renderers for the storefront page.

mod cart;
mod feedback;
mod pagination;
mod products;
mod rating;
mod toolbar;

pub use cart::*;
pub use feedback::*;
pub use pagination::*;
pub use products::*;
pub use rating::*;
pub use toolbar::*;

//! Commerce error types.
//!
//! Cart operations never fail; unknown ids are ignored. The variants here
//! cover the few operations that validate user input.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Rating outside the 1-5 star range.
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(u8),

    /// A rating was submitted before any star was selected.
    #[error("No rating selected")]
    NoRatingSelected,

    /// Unrecognized view mode name.
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),
}

//! Star-rating widget state.
//!
//! The widget shows [`MAX_RATING`] stars. A committed selection survives
//! until it is submitted; a hover preview only changes what is drawn.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Number of stars in the widget.
pub const MAX_RATING: u8 = 5;

/// How a single star is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarState {
    Filled,
    Outlined,
}

impl StarState {
    /// Icon style class ("fas" solid, "far" regular).
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Filled => "fas",
            Self::Outlined => "far",
        }
    }
}

/// Star states for a rating: stars at index < `value` are filled.
pub fn highlight(value: u8) -> [StarState; MAX_RATING as usize] {
    std::array::from_fn(|index| {
        if index < usize::from(value) {
            StarState::Filled
        } else {
            StarState::Outlined
        }
    })
}

/// The selected rating plus an optional hover preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSelection {
    committed: u8,
    preview: Option<u8>,
}

impl RatingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a rating, clamped to 0-5. Clears any preview.
    pub fn set(&mut self, value: u8) {
        self.committed = value.min(MAX_RATING);
        self.preview = None;
    }

    /// Preview a rating while the pointer is over a star.
    pub fn hover(&mut self, value: u8) {
        self.preview = Some(value.min(MAX_RATING));
    }

    /// Pointer left the stars: show the committed rating again.
    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Committed rating (0 when nothing is selected).
    pub fn value(&self) -> u8 {
        self.committed
    }

    /// Rating currently drawn: the preview if hovering, else the committed one.
    pub fn displayed(&self) -> u8 {
        self.preview.unwrap_or(self.committed)
    }

    /// Star states for what is currently drawn.
    pub fn stars(&self) -> [StarState; MAX_RATING as usize] {
        highlight(self.displayed())
    }

    /// The committed rating, if it can be submitted.
    pub fn submittable(&self) -> Result<u8, CommerceError> {
        match self.committed {
            0 => Err(CommerceError::NoRatingSelected),
            v if v > MAX_RATING => Err(CommerceError::InvalidRating(v)),
            v => Ok(v),
        }
    }

    /// Forget the selection (after a successful submit).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A rating the user gave earlier, as listed by the ratings endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRating {
    pub product_id: ProductId,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl UserRating {
    /// Rating rounded to whole stars, clamped to 0-5.
    pub fn star_count(&self) -> u8 {
        if !self.rating.is_finite() {
            return 0;
        }
        self.rating.round().clamp(0.0, f64::from(MAX_RATING)) as u8
    }
}

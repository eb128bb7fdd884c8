//! Money type for representing prices.
//!
//! Amounts are held as an integer count of micro-dollars. The search
//! endpoint sends decimal prices with more than two places (sale prices
//! such as `957.5775`), so sums and products stay exact at that scale and
//! rounding to cents happens only when an amount is displayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Micro-dollars per dollar.
const MICROS_PER_DOLLAR: i64 = 1_000_000;
/// Micro-dollars per cent.
const MICROS_PER_CENT: i64 = 10_000;

/// A dollar amount held in micro-dollars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(from = "f64", into = "f64")]
pub struct Money {
    /// Amount in millionths of a dollar.
    pub amount_micros: i64,
}

impl Money {
    /// Create a Money value from micro-dollars.
    pub const fn from_micros(amount_micros: i64) -> Self {
        Self { amount_micros }
    }

    /// Create a Money value from whole cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self::from_micros(cents.saturating_mul(MICROS_PER_CENT))
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use storefront_commerce::Money;
    /// let price = Money::from_decimal(957.5775);
    /// assert_eq!(price.amount_micros, 957_577_500);
    /// assert_eq!(price.display(), "$957.58");
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() {
            return Self::zero();
        }
        // `as` saturates at the i64 bounds.
        Self::from_micros((amount * MICROS_PER_DOLLAR as f64).round() as i64)
    }

    /// Zero dollars.
    pub const fn zero() -> Self {
        Self::from_micros(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_micros == 0
    }

    /// Amount rounded to the nearest cent, halves away from zero.
    pub fn cents(&self) -> i64 {
        let rounded = (self.amount_micros.unsigned_abs() + (MICROS_PER_CENT as u64) / 2)
            / MICROS_PER_CENT as u64;
        let rounded = i64::try_from(rounded).unwrap_or(i64::MAX);
        if self.amount_micros < 0 {
            -rounded
        } else {
            rounded
        }
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_micros as f64 / MICROS_PER_DOLLAR as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format without the symbol (e.g., "49.99"), rounded to cents.
    pub fn display_amount(&self) -> String {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Multiply by a quantity, saturating at the bounds of `i64`.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_micros(self.amount_micros.saturating_mul(factor))
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_micros(self.amount_micros.saturating_add(other.amount_micros))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

//! Product type as returned by the search endpoint.

use crate::ids::ProductId;
use crate::money::Money;
use crate::rating::MAX_RATING;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before discount, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Discount percentage, if the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Category name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Average customer rating (0-5).
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_rating: f64,
    /// Number of ratings behind `avg_rating`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_ratings: u32,
    /// Image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            original_price: None,
            discount: None,
            category: String::new(),
            avg_rating: 0.0,
            total_ratings: 0,
            image: String::new(),
        }
    }

    /// Discount percentage, if one is set and non-zero.
    pub fn active_discount(&self) -> Option<f64> {
        self.discount.filter(|d| *d > 0.0)
    }

    /// Original price, if one is set and non-zero.
    pub fn active_original_price(&self) -> Option<Money> {
        self.original_price.filter(|p| !p.is_zero())
    }

    /// Average rating rounded to whole stars.
    pub fn star_count(&self) -> u8 {
        if !self.avg_rating.is_finite() {
            return 0;
        }
        self.avg_rating.round().clamp(0.0, f64::from(MAX_RATING)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_from_full_json() {
        let json = r#"{
            "id": 12,
            "name": "Trail Shoe",
            "price": 79.5,
            "original_price": 99.0,
            "discount": 20,
            "category": "Footwear",
            "avg_rating": 4.4,
            "total_ratings": 31,
            "image": "/img/shoe.png"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(12));
        assert_eq!(p.price.cents(), 7950);
        assert_eq!(p.active_original_price(), Some(Money::from_cents(9900)));
        assert_eq!(p.active_discount(), Some(20.0));
        assert_eq!(p.star_count(), 4);
    }

    #[test]
    fn test_product_optional_fields_default() {
        let p: Product = serde_json::from_str(r#"{"id": 1, "name": "Mug", "price": 8}"#).unwrap();
        assert_eq!(p.original_price, None);
        assert_eq!(p.active_discount(), None);
        assert_eq!(p.total_ratings, 0);
        assert!(p.category.is_empty());
        assert_eq!(p.star_count(), 0);
    }

    #[test]
    fn test_product_null_fields_default() {
        let json = r#"{
            "id": 3,
            "name": "Lamp",
            "price": 12.5,
            "original_price": null,
            "discount": null,
            "category": null,
            "avg_rating": null,
            "total_ratings": null,
            "image": null
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.avg_rating, 0.0);
        assert_eq!(p.star_count(), 0);
        assert_eq!(p.total_ratings, 0);
        assert!(p.category.is_empty());
        assert!(p.image.is_empty());
        assert_eq!(p.active_discount(), None);
    }

    #[test]
    fn test_zero_discount_is_inactive() {
        let mut p = Product::new(1, "Mug", Money::from_cents(800));
        p.discount = Some(0.0);
        p.original_price = Some(Money::zero());
        assert_eq!(p.active_discount(), None);
        assert_eq!(p.active_original_price(), None);
    }

    #[test]
    fn test_star_count_rounds_and_clamps() {
        let mut p = Product::new(1, "Mug", Money::from_cents(800));
        p.avg_rating = 3.5;
        assert_eq!(p.star_count(), 4);
        p.avg_rating = 9.0;
        assert_eq!(p.star_count(), 5);
        p.avg_rating = -1.0;
        assert_eq!(p.star_count(), 0);
    }
}

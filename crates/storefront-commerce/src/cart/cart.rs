//! Cart and cart item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Items keep insertion order and there is at most one item per product
/// id. Lookups by an id that is not in the cart are silent no-ops: the
/// sidebar may still show controls for an item that was just removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product.
    ///
    /// If the product is already in the cart its quantity is increased,
    /// otherwise a new item is appended. Returns the resulting quantity.
    /// Adding zero units leaves the cart unchanged.
    pub fn add(&mut self, product: &Product, quantity: u32) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return existing.quantity;
        }

        if quantity == 0 {
            return 0;
        }

        self.items.push(CartItem::from_product(product, quantity));
        quantity
    }

    /// Set an item's quantity.
    ///
    /// A quantity below 1 removes the item. Returns whether the cart
    /// changed.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove(id);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns whether anything was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Total price (sum of price times quantity), unrounded. Rounding to
    /// cents happens when the total is displayed.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product id (unique within the cart).
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create an item by copying the product's display fields.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * i64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(cents))
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000);

        assert_eq!(cart.add(&p, 1), 1);
        assert_eq!(cart.add(&p, 2), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(p.id).map(|i| i.quantity), Some(3));
        assert_eq!(cart.total_price().display(), "$30.00");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, 100), 1);
        cart.add(&product(1, 100), 1);
        cart.add(&product(3, 100), 1);

        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_add_zero_to_new_item_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&product(1, 100), 0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 250);
        cart.add(&p, 1);

        assert!(cart.set_quantity(p.id, 5));
        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.total_price().cents(), 1250);
    }

    #[test]
    fn test_set_quantity_below_one_removes() {
        let mut cart = Cart::new();
        let p = product(1, 250);
        cart.add(&p, 2);

        assert!(cart.set_quantity(p.id, 0));
        assert!(cart.is_empty());

        cart.add(&p, 2);
        assert!(cart.set_quantity(p.id, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_id_is_silent_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 250), 1);
        let before = cart.clone();

        assert!(!cart.set_quantity(ProductId::new(99), 4));
        assert!(!cart.set_quantity(ProductId::new(99), 0));
        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_keeps_order_of_rest() {
        let mut cart = Cart::new();
        for id in 1..=4 {
            cart.add(&product(id, 100), 1);
        }

        assert!(cart.remove(ProductId::new(2)));
        let ids: Vec<u64> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1999), 2);
        cart.add(&product(2, 1), 3);

        assert_eq!(cart.total_count(), 5);
        assert_eq!(cart.total_price().cents(), 2 * 1999 + 3);
        assert_eq!(cart.total_price().display(), "$40.01");
    }

    #[test]
    fn test_sub_cent_line_totals_are_not_rounded_per_unit() {
        let mut cart = Cart::new();
        let p = Product::new(1, "Sofa", Money::from_decimal(957.5775));
        cart.add(&p, 3);

        assert_eq!(cart.items()[0].line_total().display(), "$2872.73");
        assert_eq!(cart.total_price().display(), "$2872.73");
    }
}

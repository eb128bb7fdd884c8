//! Cart sidebar - line items, item count and total.

use storefront_commerce::cart::{Cart, CartItem};

use crate::html::html_escape;

/// Render the line items of the cart sidebar.
pub fn render_cart_items(cart: &Cart) -> String {
    cart.items().iter().map(render_cart_item).collect()
}

/// Total number of units in the cart, for the header badge.
pub fn render_cart_count(cart: &Cart) -> String {
    cart.total_count().to_string()
}

/// Cart total, e.g. "$30.00".
pub fn render_cart_total(cart: &Cart) -> String {
    cart.total_price().display()
}

fn render_cart_item(item: &CartItem) -> String {
    let name = html_escape(&item.name);
    let id = item.id;
    let quantity = item.quantity;

    format!(
        r#"<div class="cart-item" data-product-id="{id}">
    <img src="{image}" alt="{name}" class="cart-item-image">
    <div class="cart-item-details">
        <h6>{name}</h6>
        <div class="price">{price}</div>
        <div class="quantity">
            <button data-action="set-quantity" data-product-id="{id}" data-quantity="{less}">-</button>
            <span>{quantity}</span>
            <button data-action="set-quantity" data-product-id="{id}" data-quantity="{more}">+</button>
        </div>
    </div>
    <button data-action="remove-from-cart" data-product-id="{id}" class="btn-close"></button>
</div>"#,
        image = html_escape(&item.image),
        price = item.price.display(),
        less = i64::from(quantity) - 1,
        more = i64::from(quantity) + 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Product;
    use storefront_commerce::Money;

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert_eq!(render_cart_items(&cart), "");
        assert_eq!(render_cart_count(&cart), "0");
        assert_eq!(render_cart_total(&cart), "$0.00");
    }

    #[test]
    fn test_line_item_controls() {
        let mut cart = Cart::new();
        cart.add(&Product::new(7, "Tea & Biscuits", Money::from_decimal(3.5)), 3);

        let html = render_cart_items(&cart);
        assert!(html.contains("<h6>Tea &amp; Biscuits</h6>"));
        assert!(html.contains(r#"<div class="price">$3.50</div>"#));
        assert!(html.contains(r#"data-product-id="7" data-quantity="2">-</button>"#));
        assert!(html.contains(r#"data-product-id="7" data-quantity="4">+</button>"#));
        assert!(html.contains(r#"data-action="remove-from-cart" data-product-id="7""#));
        assert_eq!(render_cart_count(&cart), "3");
        assert_eq!(render_cart_total(&cart), "$10.50");
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&Product::new(2, "B", Money::from_decimal(1.0)), 1);
        cart.add(&Product::new(1, "A", Money::from_decimal(1.0)), 1);

        let html = render_cart_items(&cart);
        let b = html.find("<h6>B</h6>").unwrap();
        let a = html.find("<h6>A</h6>").unwrap();
        assert!(b < a);
    }
}

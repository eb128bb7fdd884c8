//! Product grid - one card per product on the current page.

use storefront_commerce::catalog::Product;
use storefront_commerce::search::ViewMode;

use crate::html::html_escape;

const STAR: &str = "⭐";

/// Render the cards of the current page.
pub fn render_product_grid(products: &[Product], view: ViewMode) -> String {
    products
        .iter()
        .map(|p| render_product_card(p, view))
        .collect()
}

/// Product count label, e.g. "25 Products". Counts every match, not just
/// the current page.
pub fn render_product_count(total: usize) -> String {
    format!("{total} Products")
}

/// Render a single product card.
pub fn render_product_card(product: &Product, view: ViewMode) -> String {
    let badge = product
        .active_discount()
        .map(|d| format!(r#"<div class="product-badge">-{d}%</div>"#))
        .unwrap_or_default();

    let original_price = product
        .active_original_price()
        .map(|p| {
            format!(
                r#"<span class="product-original-price">{}</span>"#,
                p.display()
            )
        })
        .unwrap_or_default();

    let discount = product
        .active_discount()
        .map(|d| format!(r#"<span class="product-discount">{d}% OFF</span>"#))
        .unwrap_or_default();

    let name = html_escape(&product.name);

    format!(
        r#"<div class="col">
    <div class="product-card product-card-{view}" data-product-id="{id}">
        {badge}
        <div class="product-image">
            <img src="{image}" alt="{name}" loading="lazy">
        </div>
        <h5 class="product-title">{name}</h5>
        <div class="product-category">{category}</div>
        <div class="rating">
            {stars}
            <span class="rating-count">({total_ratings})</span>
        </div>
        <div class="mt-2">
            {original_price}
            <span class="product-price">{price}</span>
            {discount}
        </div>
        <button class="btn btn-primary w-100 mt-2" data-action="add-to-cart" data-product-id="{id}">
            Add to Cart
        </button>
    </div>
</div>"#,
        view = view.as_str(),
        id = product.id,
        image = html_escape(&product.image),
        category = html_escape(&product.category),
        stars = STAR.repeat(usize::from(product.star_count())),
        total_ratings = product.total_ratings,
        price = product.price.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::Money;

    fn lamp() -> Product {
        let mut p = Product::new(4, "Desk <Lamp>", Money::from_decimal(39.99));
        p.category = "Home".to_string();
        p.avg_rating = 3.6;
        p.total_ratings = 18;
        p.image = "/img/lamp.png".to_string();
        p
    }

    #[test]
    fn test_card_basics() {
        let html = render_product_card(&lamp(), ViewMode::Grid);
        assert!(html.contains(r#"data-product-id="4""#));
        assert!(html.contains("Desk &lt;Lamp&gt;"));
        assert!(html.contains(r#"<span class="product-price">$39.99</span>"#));
        assert!(html.contains(&"⭐".repeat(4)));
        assert!(!html.contains(&"⭐".repeat(5)));
        assert!(html.contains("(18)"));
        assert!(html.contains("Add to Cart"));
    }

    #[test]
    fn test_card_without_discount_has_no_badge() {
        let html = render_product_card(&lamp(), ViewMode::Grid);
        assert!(!html.contains("product-badge"));
        assert!(!html.contains("product-original-price"));
        assert!(!html.contains("OFF"));
    }

    #[test]
    fn test_card_with_discount() {
        let mut p = lamp();
        p.original_price = Some(Money::from_decimal(50.0));
        p.discount = Some(20.0);

        let html = render_product_card(&p, ViewMode::List);
        assert!(html.contains(r#"<div class="product-badge">-20%</div>"#));
        assert!(html.contains(r#"<span class="product-original-price">$50.00</span>"#));
        assert!(html.contains("20% OFF"));
        assert!(html.contains("product-card-list"));
    }

    #[test]
    fn test_grid_and_count() {
        let products = vec![lamp(), Product::new(5, "Mug", Money::from_decimal(8.0))];
        let html = render_product_grid(&products, ViewMode::Grid);
        assert_eq!(html.matches(r#"<div class="col">"#).count(), 2);
        assert_eq!(render_product_grid(&[], ViewMode::Grid), "");
        assert_eq!(render_product_count(25), "25 Products");
    }
}

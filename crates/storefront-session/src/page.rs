//! The rendered page: one markup string per region.

use serde::{Deserialize, Serialize};

/// Snapshot of every page region, as published after each state change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub category_label: String,
    pub sort_options: String,
    pub price_filter: String,
    pub view_buttons: String,
    pub grid_class: String,
    pub product_count: String,
    pub product_grid: String,
    pub pagination: String,
    pub cart_open: bool,
    pub cart_count: String,
    pub cart_items: String,
    pub cart_total: String,
    pub rating_stars: String,
    pub user_ratings: String,
    pub notices: String,
}

impl Page {
    /// Assemble the regions into a standalone HTML document.
    pub fn to_html(&self) -> String {
        let cart_class = if self.cart_open {
            "cart-sidebar active"
        } else {
            "cart-sidebar"
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{category_label}</title>
</head>
<body>
<div class="notices">{notices}</div>
<main class="container">
    <div class="toolbar">
        <h2 id="currentCategory">{category_label}</h2>
        <span class="product-count">{product_count}</span>
        <select id="sortOptions">{sort_options}</select>
        {price_filter}
        <div class="view-buttons">{view_buttons}</div>
    </div>
    <div id="productGrid" class="{grid_class}">
{product_grid}
    </div>
    <nav><ul class="pagination">{pagination}</ul></nav>
    <section id="ratingSection">
        <div class="rating-stars">{rating_stars}</div>
        <h5>Your ratings</h5>
        <div id="userRatings">{user_ratings}</div>
    </section>
</main>
<aside class="{cart_class}">
    <span class="cart-count">{cart_count}</span>
    <div class="cart-items">{cart_items}</div>
    <div class="cart-total">Total: <span class="total-amount">{cart_total}</span></div>
</aside>
</body>
</html>
"#,
            category_label = self.category_label,
            notices = self.notices,
            product_count = self.product_count,
            sort_options = self.sort_options,
            price_filter = self.price_filter,
            view_buttons = self.view_buttons,
            grid_class = self.grid_class,
            product_grid = self.product_grid,
            pagination = self.pagination,
            rating_stars = self.rating_stars,
            user_ratings = self.user_ratings,
            cart_count = self.cart_count,
            cart_items = self.cart_items,
            cart_total = self.cart_total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_places_regions() {
        let page = Page {
            category_label: "Home".to_string(),
            product_count: "3 Products".to_string(),
            grid_class: "row row-cols-1 g-4".to_string(),
            cart_open: true,
            cart_total: "$12.00".to_string(),
            ..Page::default()
        };

        let html = page.to_html();
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains(r#"<div id="productGrid" class="row row-cols-1 g-4">"#));
        assert!(html.contains(r#"<aside class="cart-sidebar active">"#));
        assert!(html.contains(r#"<span class="total-amount">$12.00</span>"#));
    }
}

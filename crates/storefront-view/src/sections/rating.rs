//! Rating widget and the list of the user's earlier ratings.

use storefront_commerce::rating::{RatingSelection, StarState, UserRating};

use crate::html::html_escape;

/// Render the five stars of the rating widget for the current selection.
pub fn render_rating_stars(selection: &RatingSelection) -> String {
    selection
        .stars()
        .iter()
        .enumerate()
        .map(|(i, state)| render_star(i + 1, *state))
        .collect()
}

fn render_star(value: usize, state: StarState) -> String {
    format!(
        r#"<i class="{} fa-star" data-rating="{value}"></i>"#,
        state.css_class()
    )
}

/// Render the user's earlier ratings.
pub fn render_user_ratings(ratings: &[UserRating]) -> String {
    if ratings.is_empty() {
        return r#"<p class="user-ratings-empty">No ratings yet</p>"#.to_string();
    }

    let items: String = ratings
        .iter()
        .map(|r| {
            let label = r
                .product_name
                .as_deref()
                .map(html_escape)
                .unwrap_or_else(|| format!("Product #{}", r.product_id));
            format!(
                r#"<li class="user-rating" data-product-id="{}"><span class="user-rating-name">{}</span> <span class="user-rating-stars">{}</span></li>"#,
                r.product_id,
                label,
                "⭐".repeat(usize::from(r.star_count()))
            )
        })
        .collect();

    format!(r#"<ul class="user-ratings">{items}</ul>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::ProductId;

    #[test]
    fn test_stars_follow_hover() {
        let mut sel = RatingSelection::new();
        sel.set(2);
        let html = render_rating_stars(&sel);
        assert_eq!(html.matches(r#"class="fas fa-star""#).count(), 2);
        assert_eq!(html.matches(r#"class="far fa-star""#).count(), 3);

        sel.hover(4);
        let html = render_rating_stars(&sel);
        assert_eq!(html.matches(r#"class="fas fa-star""#).count(), 4);
        assert!(html.contains(r#"data-rating="5""#));
    }

    #[test]
    fn test_user_ratings() {
        let ratings = vec![
            UserRating {
                product_id: ProductId::new(4),
                rating: 5.0,
                product_name: Some("Desk Lamp".to_string()),
            },
            UserRating {
                product_id: ProductId::new(9),
                rating: 2.0,
                product_name: None,
            },
        ];
        let html = render_user_ratings(&ratings);
        assert!(html.contains("Desk Lamp"));
        assert!(html.contains("Product #9"));
        assert_eq!(html.matches("<li").count(), 2);
    }

    #[test]
    fn test_no_ratings() {
        assert!(render_user_ratings(&[]).contains("No ratings yet"));
    }
}

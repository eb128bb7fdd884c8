//! Toolbar - category label, sort dropdown, price filter and view buttons.

use storefront_commerce::search::{QueryState, SortKey, ViewMode};

use crate::html::html_escape;

/// Heading for the current category ("All Products" when none is set).
pub fn render_category_label(state: &QueryState) -> String {
    html_escape(state.category_label())
}

/// Options of the sort dropdown, with the active key selected.
pub fn render_sort_options(selected: SortKey) -> String {
    SortKey::ALL
        .iter()
        .map(|key| {
            let attr = if *key == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                attr,
                key.display_name()
            )
        })
        .collect()
}

/// Price slider and min/max inputs, showing the raw input text.
pub fn render_price_filter(state: &QueryState) -> String {
    format!(
        r#"<div class="price-filter">
    <input type="range" class="form-range" id="priceRange" min="{min}" max="{max}" value="{slider}">
    <div class="price-inputs">
        <input type="number" class="form-control" id="minPrice" placeholder="Min" value="{min_input}">
        <input type="number" class="form-control" id="maxPrice" placeholder="Max" value="{max_input}">
    </div>
</div>"#,
        min = state.price_defaults.min,
        max = state.price_defaults.max,
        slider = state.price_slider,
        min_input = html_escape(&state.min_price_input),
        max_input = html_escape(&state.max_price_input),
    )
}

/// Grid/list toggle buttons with the active mode highlighted.
pub fn render_view_buttons(active: ViewMode) -> String {
    ViewMode::ALL
        .iter()
        .map(|mode| {
            let icon = match mode {
                ViewMode::Grid => "fa-th",
                ViewMode::List => "fa-list",
            };
            let class = if *mode == active { " active" } else { "" };
            format!(
                r#"<button class="btn btn-outline-secondary view-button{class}" data-view="{}"><i class="fas {icon}"></i></button>"#,
                mode.as_str()
            )
        })
        .collect()
}

/// Class list of the product grid container for a view mode.
pub fn product_grid_class(view: ViewMode) -> &'static str {
    view.grid_class()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let mut state = QueryState::default();
        assert_eq!(render_category_label(&state), "All Products");
        state.set_category("Toys & Games");
        assert_eq!(render_category_label(&state), "Toys &amp; Games");
    }

    #[test]
    fn test_sort_options_mark_selection() {
        let html = render_sort_options(SortKey::PriceDesc);
        assert_eq!(html.matches("<option").count(), SortKey::ALL.len());
        assert_eq!(html.matches(" selected").count(), 1);
        assert!(html.contains(r#"<option value="price_desc" selected>"#));
    }

    #[test]
    fn test_price_filter_reflects_slider() {
        let mut state = QueryState::default();
        state.set_price_slider(250);
        let html = render_price_filter(&state);
        assert!(html.contains(r#"value="250">"#));
        assert!(html.contains(r#"id="minPrice" placeholder="Min" value="0""#));
        assert!(html.contains(r#"id="maxPrice" placeholder="Max" value="250""#));
    }

    #[test]
    fn test_view_buttons() {
        let html = render_view_buttons(ViewMode::List);
        assert!(html.contains(r#"view-button active" data-view="list""#));
        assert!(html.contains(r#"view-button" data-view="grid""#));
        assert_eq!(product_grid_class(ViewMode::Grid), "row row-cols-1 row-cols-md-3 g-4");
        assert_eq!(product_grid_class(ViewMode::List), "row row-cols-1 g-4");
    }
}

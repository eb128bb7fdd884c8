//! Loading indicator, load error and transient notices.

use storefront_commerce::notice::Notices;

use crate::html::html_escape;

/// Placeholder shown in a region while its data loads.
pub fn render_loading() -> String {
    r#"<div class="loading">
    <i class="fas fa-spinner"></i>
    <div>Loading...</div>
</div>"#
        .to_string()
}

/// Shown in place of the product grid when a search fails.
pub fn render_search_error() -> String {
    r#"<div class="alert alert-danger">Error loading products</div>"#.to_string()
}

/// Render the live notices, oldest first.
pub fn render_notices(notices: &Notices) -> String {
    notices
        .items()
        .iter()
        .map(|n| {
            format!(
                r#"<div class="alert alert-{} alert-dismissible fade show" role="alert">
    {}
    <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
</div>"#,
                n.kind.as_str(),
                html_escape(&n.message)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use storefront_commerce::notice::{Notice, NoticeKind};

    #[test]
    fn test_notices_render_kind_and_escape() {
        let mut notices = Notices::default();
        notices.push(Notice::new("Added <Mug> to cart", NoticeKind::Success, Utc::now()));
        notices.push(Notice::new("Please select a rating", NoticeKind::Warning, Utc::now()));

        let html = render_notices(&notices);
        assert!(html.contains("alert alert-success"));
        assert!(html.contains("alert alert-warning"));
        assert!(html.contains("Added &lt;Mug&gt; to cart"));
        assert!(html.find("success").unwrap() < html.find("warning").unwrap());
    }

    #[test]
    fn test_no_notices() {
        assert_eq!(render_notices(&Notices::default()), "");
    }

    #[test]
    fn test_fixed_fragments() {
        assert!(render_loading().contains("Loading..."));
        assert_eq!(
            render_search_error(),
            r#"<div class="alert alert-danger">Error loading products</div>"#
        );
    }
}

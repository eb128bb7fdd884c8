//! Page control - Previous, one link per page, Next.

use storefront_commerce::search::{PageLink, Pagination};

/// Render the page control as list items.
///
/// Each link carries `data-page` with the page it leads to. Disabled links
/// still carry it; the session ignores clicks on them.
pub fn render_pagination(pagination: &Pagination) -> String {
    pagination.links().iter().map(render_link).collect()
}

fn render_link(link: &PageLink) -> String {
    let (class, target, label) = match *link {
        PageLink::Previous { target, disabled } => {
            (disabled_class(disabled), target, "Previous".to_string())
        }
        PageLink::Number { page, active } => {
            (if active { " active" } else { "" }, page, page.to_string())
        }
        PageLink::Next { target, disabled } => {
            (disabled_class(disabled), target, "Next".to_string())
        }
    };

    format!(
        r##"<li class="page-item{class}"><a class="page-link" href="#" data-page="{target}">{label}</a></li>"##
    )
}

fn disabled_class(disabled: bool) -> &'static str {
    if disabled {
        " disabled"
    } else {
        ""
    }
}

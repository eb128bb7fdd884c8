//! One-shot product search.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::search::{paginate, SearchRequest};
use storefront_data::SearchClient;
use storefront_session::Storefront;
use tokio::time::Instant;

use super::SearchArgs;
use crate::context::Context;
use crate::output::stars;

#[derive(Serialize)]
struct SearchReport<'a> {
    request: SearchRequest,
    total: usize,
    page: usize,
    page_count: usize,
    products: &'a [Product],
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let mut storefront = Storefront::new(ctx.config.session_config());

    storefront.text_input(args.query.as_str(), Instant::now());
    if let Some(category) = args.category.as_deref() {
        storefront.change_category(category);
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        storefront.set_price_inputs(
            args.min_price.clone().unwrap_or_default(),
            args.max_price.clone().unwrap_or_default(),
        );
    }
    storefront.change_sort(args.sort);
    storefront.switch_view(args.view);
    storefront.change_page(args.page);
    let ticket = storefront.search();

    let spinner = ctx.output.spinner(&format!("Searching {}", ctx.config.api.base_url));
    let result = client.search(&ticket.request).await;
    spinner.finish_and_clear();

    let failure = result.as_ref().err().cloned();
    storefront.apply_search_result(ticket.generation, result);

    if args.html {
        ctx.output.raw(&storefront.render().to_html());
        return Ok(());
    }
    if let Some(e) = failure {
        return Err(e).context("Search request failed");
    }

    let query = storefront.query();
    let current = paginate(storefront.results(), query.page, query.page_size);

    if ctx.output.is_json() {
        ctx.output.json(&SearchReport {
            request: ticket.request,
            total: storefront.results().len(),
            page: current.page,
            page_count: current.page_count,
            products: current.slice,
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} - {} Products",
        query.category_label(),
        storefront.results().len()
    ));
    if current.slice.is_empty() {
        ctx.output.info("No products on this page");
    }
    for product in current.slice {
        let mut line = format!(
            "#{} {} {} {} ({})",
            product.id,
            product.name,
            product.price,
            stars(product.star_count()),
            product.total_ratings
        );
        if let Some(discount) = product.active_discount() {
            line.push_str(&format!(" -{}%", discount));
        }
        ctx.output.list_item(&line);
    }
    ctx.output.kv(
        "page",
        &format!("{} of {}", current.page, current.page_count),
    );

    Ok(())
}

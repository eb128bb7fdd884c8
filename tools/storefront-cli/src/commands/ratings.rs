//! Rating commands.

use anyhow::{Context as _, Result};
use storefront_commerce::ProductId;
use storefront_data::{RatingSubmission, RatingsClient};

use super::{RatingsArgs, RatingsCommand};
use crate::context::Context;
use crate::output::stars;

/// Run the ratings command.
pub async fn run(args: RatingsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        RatingsCommand::List => list_ratings(ctx).await,
        RatingsCommand::Submit { product_id, rating } => {
            submit_rating(ProductId::new(product_id), rating, ctx).await
        }
    }
}

async fn list_ratings(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let spinner = ctx.output.spinner("Loading ratings");
    let ratings = client.load_ratings().await;
    spinner.finish_and_clear();
    let ratings = ratings.context("Failed to load ratings")?;

    if ctx.output.is_json() {
        ctx.output.json(&ratings);
        return Ok(());
    }

    ctx.output.header("Your ratings");
    if ratings.is_empty() {
        ctx.output.info("No ratings yet");
    }
    for rating in &ratings {
        let label = rating
            .product_name
            .clone()
            .unwrap_or_else(|| format!("Product #{}", rating.product_id));
        ctx.output
            .list_item(&format!("{} {}", stars(rating.star_count()), label));
    }

    Ok(())
}

async fn submit_rating(product_id: ProductId, rating: u8, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let submission = RatingSubmission { product_id, rating };

    let spinner = ctx.output.spinner("Submitting rating");
    let result = client.submit_rating(&submission).await;
    spinner.finish_and_clear();
    result.with_context(|| format!("Failed to rate product {}", product_id))?;

    if ctx.output.is_json() {
        ctx.output.json(&submission);
    } else {
        ctx.output.success(&format!(
            "Rated product {} {}",
            product_id,
            stars(rating)
        ));
    }

    Ok(())
}

//! Scripted session replay.

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_session::{parse_script, spawn, ScriptStep};
use tracing::debug;

use super::SessionArgs;
use crate::context::Context;

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let script = read_script(args.script.as_deref(), ctx)?;
    let steps = parse_script(&script)?;
    ctx.output.debug(&format!("{} script steps", steps.len()));
    if !steps.iter().any(|step| matches!(step, ScriptStep::Event(_))) {
        ctx.output
            .warn("Script has no events; only the initial page load will run");
    }

    let client = Arc::new(ctx.client()?);
    let session = spawn(client, ctx.config.session_config());

    let spinner = ctx.output.spinner("Running session");
    for step in steps {
        match step {
            ScriptStep::Event(event) => {
                debug!(?event, "sending");
                session.send(event).await?;
            }
            ScriptStep::Wait(duration) => tokio::time::sleep(duration).await,
        }
    }
    let page = session.finish().await?;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&page);
    } else if args.html {
        ctx.output.raw(&page.to_html());
    } else {
        ctx.output.header(&page.category_label);
        ctx.output.kv("products", &page.product_count);
        ctx.output.kv("cart items", &page.cart_count);
        ctx.output.kv("cart total", &page.cart_total);
        ctx.output.kv("cart open", &page.cart_open.to_string());
        ctx.output
            .kv("notices", &page.notices.matches("class=\"alert ").count().to_string());
    }

    Ok(())
}

fn read_script(path: Option<&str>, ctx: &Context) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read script from stdin")?;
            Ok(script)
        }
        Some(path) => {
            let path = ctx.resolve_path(path);
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script: {}", path.display()))
        }
    }
}

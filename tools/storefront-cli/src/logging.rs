//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str =
    "storefront_cli=info,storefront_session=info,storefront_data=info";
const VERBOSE_FILTER: &str =
    "storefront_cli=debug,storefront_session=debug,storefront_data=debug,info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// Logs go to stderr so page output on stdout stays clean; `json` switches
/// to one JSON object per line.
pub fn init(verbose: bool, json: bool) {
    let default = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

//! Installs a `tracing_subscriber` formatter, filtered by the
//! `RUST_LOG` environment variable. Spans are emitted by the
//! traversal entry points of [`HorizonTree`](crate::HorizonTree).
//!
//! ```bash
//! RUST_LOG=horizon=debug horizon update.json
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialises the tracer, using tracing subscription.
/// This is optional, not calling this function will simply
/// not log traces.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}

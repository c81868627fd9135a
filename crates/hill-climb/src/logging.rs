//! Diagnostic tracing for the CLI.
//!
//! The library only emits `tracing` events. The binary calls [`init`] once so
//! they reach stderr; answers themselves always go to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` when `RUST_LOG` is unset or unparsable.
///
/// ```bash
/// RUST_LOG=hill_climb=debug hill-climb solve input.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

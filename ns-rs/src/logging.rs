//! Tracing setup for the `ns` binary.
//!
//! `RUST_LOG` wins when set.  Otherwise `-d` turns on `ns=debug` and the
//! default is silence, so stderr carries nothing but script diagnostics.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.  Later calls are no-ops.
pub fn init(debug: bool) {
    TRACING_INIT.call_once(|| {
        let fallback = if debug { "ns=debug" } else { "off" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

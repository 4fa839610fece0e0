//! Tracing setup for the `todo` binary.
//!
//! Reads `RUST_LOG`, defaulting to `warn`, so failed operations reported by
//! the controller's diagnostics sink show up on stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

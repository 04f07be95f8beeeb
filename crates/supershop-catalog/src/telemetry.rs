//! # Logging Setup
//!
//! Structured logging for the storefront binary.
//!
//! ```text
//! RUST_LOG set?  ── yes ──► use it
//!       │
//!       no
//!       ▼
//! DEFAULT_LOG_FILTER ("info,supershop=debug")
//! ```
//!
//! Logs go to stderr so the home page JSON on stdout stays clean.

use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,supershop=debug";

/// Installs the global tracing subscriber. Call once, at startup.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    build_subscriber(filter).init();
}

/// The subscriber `init_tracing` installs. The filter is the only level
/// gate; adding `with_max_level` here would replace it.
fn build_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

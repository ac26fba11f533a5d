// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Filter applied when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber for structured logging
///
/// The subscriber is configured with:
/// - JSON formatting for easy parsing by log aggregation systems
/// - Filtering from `RUST_LOG`, falling back to `info`
/// - Output to stdout
///
/// The plugins only emit events (skipped layers, dropped option keys); a
/// host application that already installed its own subscriber should not
/// call this.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Examples
///
/// ```
/// use url_loader::logging::init_subscriber;
///
/// init_subscriber().expect("Failed to initialize logging");
/// tracing::info!("URL loader ready");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()?;

    Ok(())
}

//! Text-menu front end for the inventory engine.
//!
//! Provides environment-based configuration, logging setup, and an
//! interactive session that lists products, reports stock, and places orders
//! through the `inventory` crate's public API.

pub mod config;
pub mod error;
pub mod menu;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use config::Config;
pub use error::ShopError;
pub use menu::{Command, Flow, Session};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

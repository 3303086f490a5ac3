//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the VPR Links REST API on its own.
//!
//! ## Intended use
//! Useful for development and debugging. The workspace's `vpr-links-run` binary is the default
//! entry point and serves the same router.

use api_rest::RestConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the VPR Links REST API server
///
/// # Environment Variables
/// - `VPR_LINKS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configured address is invalid or cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!("-- Starting VPR Links REST API on {}", cfg.addr());

    api_rest::serve(cfg).await
}

use api_rest::RestConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the VPR Links application
///
/// Resolves configuration once, then serves the REST API (catalog, rendering, Swagger UI).
///
/// # Environment Variables
/// - `VPR_LINKS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `RUST_LOG`: tracing filter, added to the default `vpr_links=info` directive
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vpr_links=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = RestConfig::from_env()?;
    tracing::info!("++ Starting VPR Links REST on {}", cfg.addr());

    api_rest::serve(cfg).await
}

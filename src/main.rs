use std::env;

use forky::proxy::{self, ProxyConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment variables
    let api_key = match env::var("SPOONACULAR_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::error!("SPOONACULAR_API_KEY is not set");
            tracing::error!("The proxy cannot reach Spoonacular without an API key.");
            tracing::error!("Get one at https://spoonacular.com/food-api and export it:");
            tracing::error!("  export SPOONACULAR_API_KEY=<your key>");
            std::process::exit(1);
        }
    };

    let upstream_base = env::var("SPOONACULAR_BASE_URL")
        .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    tracing::info!("Forwarding recipe requests to {}", upstream_base);

    let app = proxy::router(ProxyConfig::new(api_key, upstream_base));

    tracing::info!("Forky recipe proxy listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

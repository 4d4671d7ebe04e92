use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commute_server::config::AppConfig;
use commute_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("commute_server=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    let engine = config.build_engine()?;
    info!(
        backend = engine.has_backend(),
        geocoder = %config.geocode.base_url,
        router = %config.router.public_url,
        local_router = config.router.use_local,
        transit = %config.transit.base_url,
        "starting commute server"
    );
    let app = create_router(AppState::new(engine));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    info!("  GET  /health         - Health check");
    info!("  POST /api/recommend  - Recommend a travel mode");

    axum::serve(listener, app).await?;
    Ok(())
}

//! Expansa Web Server
//!
//! Run with: cargo run -p expansa-web

use expansa_config::Config;
use expansa_ranker::check_tiers;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("Starting Expansa v{}", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }
    info!(
        "Tier thresholds: tier 1 >= {}, tier 2 >= {}",
        config.scoring.tier1_min, config.scoring.tier2_min
    );

    let addr = config.server.bind_addr()?;
    let state = expansa_web::state::AppState::new(&config)?;

    for m in check_tiers(&state.indications, &state.thresholds) {
        warn!(
            indication = %m.name,
            score = m.score,
            stored = m.stored.number(),
            expected = m.expected.number(),
            "Stored tier disagrees with threshold rule"
        );
    }
    info!(
        "Loaded {} indications and {} relationship edges for {}",
        state.indications.len(),
        state.edges.len(),
        expansa_data::target().symbol
    );

    let app = expansa_web::router::build_router(state);

    for (path, purpose) in expansa_web::router::ROUTES {
        info!("  {:<28} {}", path, purpose);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    info!("Open your browser and navigate to http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

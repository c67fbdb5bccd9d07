//! Hero API server: loads `.env`, opens the database, ensures the hero table, serves until Ctrl-C.

use hero_api::{build_router, AppState, Database, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let default_filter = if config.echo_sql {
        "hero_api=info,tower_http=info,sqlx=debug"
    } else {
        "hero_api=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let db = Database::connect(&config.database_url, config.echo_sql).await?;
    db.ensure_schema().await?;
    tracing::info!(database = %config.database_url, "database ready");

    let app = build_router(AppState::new(db.clone()), config.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

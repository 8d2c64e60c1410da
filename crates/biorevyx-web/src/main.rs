//! Bio Revive 360 Web Server
//!
//! Run with: cargo run -p biorevyx-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use biorevyx_config::Config;
use biorevyx_web::router::build_router;
use biorevyx_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Bio Revive 360 web server...");

    let config = Config::load()?;
    let addr = config.bind_addr();

    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

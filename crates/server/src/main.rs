//! Superhero Registry server - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use superhero_server::infrastructure::{
    clock::SystemClock,
    config::{load_dotenv_from_repo_root, ServerConfig},
    sqlite::{self, SqliteRepositories},
};
use superhero_server::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (cargo may run the binary from `crates/server`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superhero_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Superhero Registry");

    let config = ServerConfig::from_env();

    // Storage
    let pool = sqlite::connect(&config.database_url).await?;
    sqlite::ensure_schema(&pool).await?;
    if config.seed_super_powers {
        sqlite::seed_super_powers(&pool).await?;
    }

    let app = Arc::new(App::new(
        SqliteRepositories::new(pool),
        Arc::new(SystemClock::new()),
    ));

    let cors = config.cors_layer();
    if cors.is_none() {
        tracing::info!("CORS_ALLOWED_ORIGINS not set; CORS layer disabled");
    }
    let router = api::router(app, cors);

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

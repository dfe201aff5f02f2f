pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Config, Mode};
use crate::db::Database;
use crate::templates::Templates;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub templates: Arc<Templates>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(db: Arc<Database>, config: &Config) -> Self {
        Self {
            db,
            templates: Arc::new(Templates::new(config.template_dir.clone())),
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Build the web router: static assets plus the page dispatcher
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/static/*path",
            get(routes::assets::serve).fallback(routes::dispatch),
        )
        .route(
            "/static",
            get(routes::assets::missing).fallback(routes::dispatch),
        )
        .route(
            "/static/",
            get(routes::assets::missing).fallback(routes::dispatch),
        )
        .fallback(routes::dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Log to stderr so console output stays readable
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?.apply_cli(&cli);

    tracing::info!(url = %config.database_url, "Connecting to database...");
    let db = Database::connect(&config.database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let db = Arc::new(db);
    let result = match cli.mode {
        Mode::Console => {
            tracing::info!("Running the app in console mode");
            console::run(&db).await.map_err(anyhow::Error::from)
        }
        Mode::Web => serve(AppState::new(db.clone(), &config), &config.addr()).await,
    };

    db.close().await;
    tracing::info!("Database closed");
    result
}

async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let app = build_router(state);

    tracing::info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenvy::dotenv;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod handlers {
    pub mod api_error;
    pub mod submission_dtos;
    pub mod submission_handlers;
}
mod models {
    pub mod submission_models;
}
mod repositories {
    pub mod submission_repository;
}
mod schema;

use config::Config;
use handlers::submission_handlers;
use repositories::submission_repository::SubmissionRepository;

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    submissions: Arc<SubmissionRepository>,
}

fn run_migrations(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = pool.get().context("Failed to get DB connection")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;
    for version in applied {
        tracing::info!("Applied migration {}", version);
    }
    Ok(())
}

/// Browsers may only call from the configured frontend, or from anywhere when
/// none is configured.
fn cors_layer(frontend_url: Option<&str>) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]);

    Ok(match frontend_url {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("FRONTEND_URL is not a valid origin: {}", origin))?,
        ),
        None => cors.allow_origin(Any),
    })
}

fn router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/registrations", post(submission_handlers::create_registration))
        .route("/api/contact", post(submission_handlers::create_contact_message))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vlv_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let manager = ConnectionManager::<SqliteConnection>::new(config.database_url.as_str());
    let pool = r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create pool")?;
    run_migrations(&pool)?;

    let state = Arc::new(AppState {
        submissions: Arc::new(SubmissionRepository::new(pool)),
    });
    let cors = cors_layer(config.frontend_url.as_deref())?;
    let app = router(state, cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!(
        "Registration store listening on {} (database {})",
        config.bind_addr,
        config.database_url
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// A fresh in-memory database per call. A single pooled connection keeps
/// every query on the same database.
#[cfg(test)]
fn test_pool() -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .unwrap();
    run_migrations(&pool).unwrap();
    pool
}

//! Student records server.
//!
//! Reads configuration from the environment (and `.env`), prepares the store, and serves
//! the API. With `STORE=memory` no database is needed.

use std::sync::Arc;

use student_records::{
    app, apply_migrations, ensure_database_exists, AppConfig, AppState, MemoryStudentStore,
    PgStudentStore, StoreKind, StudentStore,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_records=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn StudentStore> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            apply_migrations(&pool).await?;
            Arc::new(PgStudentStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            Arc::new(MemoryStudentStore::new())
        }
    };

    let state = AppState::new(store, config.allowed_origin.clone());
    let router = app(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        allowed_origin = ?config.allowed_origin,
        "listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, router).await?;
    Ok(())
}

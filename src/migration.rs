//! Database bootstrap: create the target database if needed, then the `students` table.

use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const STUDENTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id BIGSERIAL PRIMARY KEY,
        first_name VARCHAR(50) NOT NULL,
        last_name VARCHAR(50) NOT NULL,
        email TEXT NOT NULL,
        major TEXT NOT NULL
    )
"#;

/// Create the `students` table. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(STUDENTS_DDL).execute(pool).await?;
    tracing::info!("students table ready");
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not. Connects to the
/// `postgres` maintenance database on the same server to run CREATE DATABASE.
/// A URL without a database name is left to the server default. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = parse_database_url(database_url)?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = opts.database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn parse_database_url(url: &str) -> Result<PgConnectOptions, ConfigError> {
    PgConnectOptions::from_str(url).map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

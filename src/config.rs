//! Runtime configuration from environment variables.

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/students";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://academiasphere-project.vercel.app";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Which [`StudentStore`](crate::store::StudentStore) backs the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(ConfigError::InvalidValue {
                var: "STORE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    /// The one origin allowed to make cross-origin requests, e.g. `https://app.example.com`.
    pub allowed_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub max_body_bytes: usize,
    pub store: StoreKind,
}

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let allowed_origin = parse_origin(
            &lookup("ALLOWED_ORIGIN").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into()),
        )?;
        let bind_addr: SocketAddr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let max_connections: u32 = parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", Some(DEFAULT_MAX_CONNECTIONS))?;
        let max_body_bytes: usize = parse_var(&lookup, "MAX_BODY_BYTES", Some(DEFAULT_MAX_BODY_BYTES))?;
        let store = match lookup("STORE") {
            Some(s) => s.parse()?,
            None => StoreKind::Postgres,
        };
        Ok(Self {
            database_url,
            allowed_origin,
            bind_addr,
            max_connections,
            max_body_bytes,
            store,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match (lookup(var), default) {
        (Some(raw), _) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        (None, Some(d)) => Ok(d),
        (None, None) => Err(ConfigError::InvalidValue {
            var,
            value: String::new(),
        }),
    }
}

/// An origin is `scheme://host[:port]` with no path; a trailing slash is tolerated and removed.
fn parse_origin(raw: &str) -> Result<HeaderValue, ConfigError> {
    let origin = raw.trim().trim_end_matches('/');
    let rest = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidOrigin(raw.to_string()))?;
    if rest.is_empty() || rest.contains('/') {
        return Err(ConfigError::InvalidOrigin(raw.to_string()));
    }
    HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(raw.to_string()))
}

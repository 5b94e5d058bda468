//! Student records: REST/JSON CRUD for students backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreKind};
pub use error::{AppError, ConfigError, FieldError};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{Student, StudentFields, StudentPayload};
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{MemoryStudentStore, PgStudentStore, StudentStore};

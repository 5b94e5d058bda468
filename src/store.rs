//! Persistence gateway for student records.

#[cfg(test)]
mod contract;
mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

use crate::error::AppError;
use crate::model::{Student, StudentFields};
use async_trait::async_trait;

/// CRUD access to stored students, keyed by store-generated id.
///
/// `replace` and `delete` return [`AppError::NotFound`] when no record has the given id.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All records, ordered by id.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// Persist with a fresh id and return the stored record.
    async fn insert(&self, fields: StudentFields) -> Result<Student, AppError>;

    /// Overwrite every field of an existing record. The id is unchanged.
    async fn replace(&self, id: i64, fields: StudentFields) -> Result<Student, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Readiness check.
    async fn ping(&self) -> Result<(), AppError>;
}

pub(crate) fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("student {}", id))
}

//! PostgreSQL-backed store.

use super::{not_found, StudentStore};
use crate::error::AppError;
use crate::model::{Student, StudentFields};
use async_trait::async_trait;
use sqlx::PgPool;

const COLUMNS: &str = "id, first_name, last_name, email, major";

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM students ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(&format!(
            "SELECT {} FROM students WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, fields: StudentFields) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (first_name, last_name, email, major) VALUES ($1, $2, $3, $4) RETURNING {}",
            COLUMNS
        ))
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.major)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn replace(&self, id: i64, fields: StudentFields) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET first_name = $2, last_name = $3, email = $4, major = $5 WHERE id = $1 RETURNING {}",
            COLUMNS
        ))
        .bind(id)
        .bind(&fields.first_name)
        .bind(&fields.last_name)
        .bind(&fields.email)
        .bind(&fields.major)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

//! Student operations: validate the payload, then hand off to the store.

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use crate::store::StudentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn StudentStore {
        self.store.as_ref()
    }

    pub async fn list(&self) -> Result<Vec<Student>, AppError> {
        self.store.list().await
    }

    pub async fn read(&self, id: i64) -> Result<Student, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, payload: StudentPayload) -> Result<Student, AppError> {
        let fields = payload.validate()?;
        let student = self.store.insert(fields).await?;
        tracing::info!(id = student.id, "student created");
        Ok(student)
    }

    /// Replace every field of an existing student; the id is preserved.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, payload: StudentPayload) -> Result<Student, AppError> {
        let fields = payload.validate()?;
        let student = self.store.replace(id, fields).await?;
        tracing::info!("student updated");
        Ok(student)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.store.delete(id).await?;
        tracing::info!("student deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStudentStore;

    fn service() -> StudentService {
        StudentService::new(Arc::new(MemoryStudentStore::new()))
    }

    fn payload(first: &str, email: &str) -> StudentPayload {
        StudentPayload {
            first_name: Some(first.into()),
            last_name: Some("Lee".into()),
            email: Some(email.into()),
            major: Some("CS".into()),
        }
    }

    #[tokio::test]
    async fn create_then_read_returns_same_fields() {
        let svc = service();
        let created = svc.create(payload("Al", "a@b.com")).await.unwrap();
        let read = svc.read(created.id).await.unwrap();
        assert_eq!(read, created);
        assert_eq!(read.first_name, "Al");
        assert_eq!(read.email, "a@b.com");
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_store() {
        let svc = service();
        let err = svc.create(payload("A", "a@b.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_untouched() {
        let svc = service();
        let created = svc.create(payload("Al", "a@b.com")).await.unwrap();
        let err = svc
            .update(created.id, payload("Bo", "not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(svc.read(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let err = service().update(5, payload("Al", "a@b.com")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_read_is_not_found() {
        let svc = service();
        let created = svc.create(payload("Al", "a@b.com")).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.read(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.delete(created.id).await, Err(AppError::NotFound(_))));
    }
}

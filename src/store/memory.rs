//! In-process store. Ids start at 1 and are never reused.

use super::{not_found, StudentStore};
use crate::error::AppError;
use crate::model::{Student, StudentFields};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Student>,
}

#[derive(Clone, Default)]
pub struct MemoryStudentStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock only means another request panicked mid-write; the map itself is still usable.
fn read(store: &MemoryStudentStore) -> std::sync::RwLockReadGuard<'_, Inner> {
    store.inner.read().unwrap_or_else(|e| e.into_inner())
}

fn write(store: &MemoryStudentStore) -> std::sync::RwLockWriteGuard<'_, Inner> {
    store.inner.write().unwrap_or_else(|e| e.into_inner())
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(read(self).rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(read(self).rows.get(&id).cloned())
    }

    async fn insert(&self, fields: StudentFields) -> Result<Student, AppError> {
        let mut inner = write(self);
        inner.next_id += 1;
        let student = fields.into_student(inner.next_id);
        inner.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn replace(&self, id: i64, fields: StudentFields) -> Result<Student, AppError> {
        let mut inner = write(self);
        let slot = inner.rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        *slot = fields.into_student(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        write(self).rows.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

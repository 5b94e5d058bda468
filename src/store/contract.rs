//! Behaviour every `StudentStore` must show, run against each backend's tests.

use super::StudentStore;
use crate::error::AppError;
use crate::model::StudentFields;

fn fields(first: &str, email: &str) -> StudentFields {
    StudentFields {
        first_name: first.into(),
        last_name: "Lee".into(),
        email: email.into(),
        major: "CS".into(),
    }
}

/// Works on a store that already holds rows: counts are taken relative to the start, and the
/// id used for absent lookups is one the store never hands out.
pub(crate) async fn exercise(store: &dyn StudentStore) {
    const ABSENT: i64 = i64::MAX;

    store.ping().await.unwrap();
    let before = store.list().await.unwrap().len();

    let created = store.insert(fields("Al", "a@b.com")).await.unwrap();
    assert_eq!(created.first_name, "Al");
    assert_eq!(created.email, "a@b.com");
    assert_eq!(store.get(created.id).await.unwrap(), Some(created.clone()));

    let other = store.insert(fields("Bo", "bo@b.com")).await.unwrap();
    assert_ne!(other.id, created.id);

    let replaced = store
        .replace(created.id, fields("Cy", "cy@b.com"))
        .await
        .unwrap();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.first_name, "Cy");
    assert_eq!(replaced.email, "cy@b.com");
    assert_eq!(store.get(created.id).await.unwrap(), Some(replaced));

    assert_eq!(store.list().await.unwrap().len(), before + 2);

    store.delete(created.id).await.unwrap();
    assert_eq!(store.get(created.id).await.unwrap(), None);
    assert!(matches!(store.delete(created.id).await, Err(AppError::NotFound(_))));
    assert_eq!(store.list().await.unwrap().len(), before + 1);

    assert_eq!(store.get(ABSENT).await.unwrap(), None);
    assert!(matches!(
        store.replace(ABSENT, fields("Al", "a@b.com")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(store.delete(ABSENT).await, Err(AppError::NotFound(_))));

    store.delete(other.id).await.unwrap();
}

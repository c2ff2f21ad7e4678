use opal_storage::{FilePersistence, MemoryPersistence, Persistence, PersistenceError};
use opal_types::StoreKey;
use serde_json::{Value, json};

// ── FilePersistence ──────────────────────────────────────────────

#[tokio::test]
async fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FilePersistence::open(dir.path().join("state.json"))
        .await
        .unwrap();
    assert!(backend.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn persisted_entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let backend = FilePersistence::open(&path).await.unwrap();
    backend
        .persist(&StoreKey::new("session"), &json!({"authToken": "tok1"}))
        .await
        .unwrap();
    backend
        .persist(&StoreKey::new("isBeta"), &json!(true))
        .await
        .unwrap();
    drop(backend);

    let reopened = FilePersistence::open(&path).await.unwrap();
    let all = reopened.load_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[&StoreKey::new("session")], json!({"authToken": "tok1"}));
    assert_eq!(all[&StoreKey::new("isBeta")], json!(true));
}

#[tokio::test]
async fn cleared_key_survives_reopen_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let backend = FilePersistence::open(&path).await.unwrap();
    backend
        .persist(&StoreKey::new("userLocation"), &Value::Null)
        .await
        .unwrap();
    drop(backend);

    let reopened = FilePersistence::open(&path).await.unwrap();
    let all = reopened.load_all().await.unwrap();
    // Cleared is a persisted null entry, not an absent key.
    assert_eq!(all.get(&StoreKey::new("userLocation")), Some(&Value::Null));
}

#[tokio::test]
async fn persist_many_writes_all_entries_at_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let backend = FilePersistence::open(&path).await.unwrap();
    backend
        .persist_many(&[
            (StoreKey::new("shareTempFile"), Value::Null),
            (StoreKey::new("shareUnknownUserDetails"), Value::Null),
        ])
        .await
        .unwrap();

    let reopened = FilePersistence::open(&path).await.unwrap();
    assert_eq!(reopened.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn non_object_snapshot_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    tokio::fs::write(&path, "[1, 2, 3]").await.unwrap();

    let err = FilePersistence::open(&path).await.unwrap_err();
    assert!(matches!(err, PersistenceError::Corrupt(_)));
}

#[tokio::test]
async fn unparseable_snapshot_is_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    tokio::fs::write(&path, "not json at all").await.unwrap();

    let err = FilePersistence::open(&path).await.unwrap_err();
    assert!(matches!(err, PersistenceError::Serialization(_)));
}

// ── MemoryPersistence ────────────────────────────────────────────

#[tokio::test]
async fn memory_backend_round_trips() {
    let backend = MemoryPersistence::new();
    backend
        .persist(&StoreKey::new("network"), &json!({"isOffline": false}))
        .await
        .unwrap();

    let all = backend.load_all().await.unwrap();
    assert_eq!(all[&StoreKey::new("network")], json!({"isOffline": false}));
}

#[tokio::test]
async fn memory_backend_seeded_entries_load() {
    let mut seed = std::collections::HashMap::new();
    seed.insert(StoreKey::new("isBeta"), json!(true));
    let backend = MemoryPersistence::with_entries(seed);

    let all = backend.load_all().await.unwrap();
    assert_eq!(all[&StoreKey::new("isBeta")], json!(true));
}

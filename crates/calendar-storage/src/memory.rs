// In-memory event store
//
// A database-free implementation of EventStore with the same observable
// behavior as the Postgres store, including the not-found conditions. Used
// by handler tests and EVENT_STORE=memory runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::models::{CreateEvent, EventRow, UpdateEvent};
use crate::traits::EventStore;

/// Map of id to event plus the id counter, guarded as one unit so
/// concurrent creates observe unique, monotonically assigned ids.
#[derive(Debug)]
struct Inner {
    events: HashMap<i64, EventRow>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            events: HashMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory event store
///
/// Reads take the shared lock, writes the exclusive lock; every operation
/// holds the lock for its full duration, so per-store effects are totally
/// ordered.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryEventStore {
    /// Create an empty store with ids starting at 1
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn create(&self, input: CreateEvent) -> Result<EventRow> {
        let mut inner = self.inner.write().await;

        let row = EventRow {
            id: inner.next_id,
            created_by: input.created_by,
            created_at: input.created_at,
            title: input.title,
            description: input.description,
            event_time: input.event_time,
            remind_at: input.remind_at,
        };
        inner.events.insert(row.id, row.clone());
        inner.next_id += 1;

        Ok(row)
    }

    async fn update(&self, id: i64, input: UpdateEvent) -> Result<EventRow> {
        let mut inner = self.inner.write().await;

        // Existence is checked before mutating; id/created_by/created_at
        // are never touched.
        let row = inner.events.get_mut(&id).ok_or(StoreError::NotFound)?;
        row.title = input.title;
        row.description = input.description;
        row.event_time = input.event_time;
        row.remind_at = input.remind_at;

        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.write().await;

        inner.events.remove(&id).ok_or(StoreError::NotFound)?;
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<EventRow>> {
        let inner = self.inner.read().await;
        Ok(inner.events.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<EventRow> {
        let inner = self.inner.read().await;
        inner.events.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn sample_input(title: &str) -> CreateEvent {
        let now = Utc::now();
        CreateEvent {
            created_by: "test_user".to_string(),
            created_at: now,
            title: title.to_string(),
            description: "Test Description".to_string(),
            event_time: now + Duration::hours(24),
            remind_at: now + Duration::hours(23),
        }
    }

    fn sample_update(title: &str) -> UpdateEvent {
        let now = Utc::now();
        UpdateEvent {
            title: title.to_string(),
            description: "Updated Description".to_string(),
            event_time: now + Duration::hours(48),
            remind_at: now + Duration::hours(47),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = InMemoryEventStore::new();

        let created = store.create(sample_input("Test Event")).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_ids_are_monotonic() {
        let store = InMemoryEventStore::new();

        let first = store.create(sample_input("first")).await.unwrap();
        let second = store.create(sample_input("second")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_update_preserves_identity_fields() {
        let store = InMemoryEventStore::new();
        let created = store.create(sample_input("Test Event")).await.unwrap();

        let input = sample_update("Updated Event");
        let updated = store.update(created.id, input.clone()).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_by, created.created_by);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, input.title);
        assert_eq!(updated.description, input.description);
        assert_eq!(updated.event_time, input.event_time);
        assert_eq!(updated.remind_at, input.remind_at);

        let fetched = store.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_delete_removes_from_both_read_paths() {
        let store = InMemoryEventStore::new();
        let created = store.create(sample_input("Test Event")).await.unwrap();

        store.delete(created.id).await.unwrap();

        assert!(matches!(
            store.get_by_id(created.id).await,
            Err(StoreError::NotFound)
        ));
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_id_reports_not_found() {
        let store = InMemoryEventStore::new();

        assert!(matches!(
            store.get_by_id(42).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(
            store.update(42, sample_update("nope")).await,
            Err(StoreError::NotFound)
        ));
        assert!(matches!(store.delete(42).await, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_deleted_id_is_never_reused() {
        let store = InMemoryEventStore::new();

        let first = store.create(sample_input("first")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(sample_input("second")).await.unwrap();
        assert_ne!(second.id, first.id);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_get_all_returns_every_current_event() {
        let store = InMemoryEventStore::new();

        for i in 0..3 {
            store.create(sample_input(&format!("event {i}"))).await.unwrap();
        }
        store.delete(2).await.unwrap();

        let mut ids: Vec<i64> = store.get_all().await.unwrap().iter().map(|e| e.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_assign_unique_ids() {
        const N: usize = 32;
        let store = Arc::new(InMemoryEventStore::new());

        let mut handles = Vec::with_capacity(N);
        for i in 0..N {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(sample_input(&format!("event {i}")))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::with_capacity(N);
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), N);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&(N as i64)));
    }
}

// Storage trait for events
//
// Both backends satisfy the same observable contract: after create,
// get_by_id returns an equal record; after update, the mutable fields change
// while id/created_by/created_at are retained; after delete, get_by_id fails
// and get_all excludes the id. Ordering of get_all is implementation-defined.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{CreateEvent, EventRow, UpdateEvent};

/// Capability contract any event backend must implement
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a new event and return it with its assigned id
    async fn create(&self, input: CreateEvent) -> Result<EventRow>;

    /// Replace the mutable fields of the event with the given id
    ///
    /// Returns `StoreError::NotFound` when no event has that id.
    async fn update(&self, id: i64, input: UpdateEvent) -> Result<EventRow>;

    /// Remove the event with the given id
    ///
    /// Returns `StoreError::NotFound` when no event has that id.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Return every current event; callers must not depend on order
    async fn get_all(&self) -> Result<Vec<EventRow>>;

    /// Return the event with the given id, or `StoreError::NotFound`
    async fn get_by_id(&self, id: i64) -> Result<EventRow>;
}

// Event service for business logic
//
// Owns the injected store handle; the trait object is the seam that lets
// handler code run unchanged against Postgres or the in-memory store.

use std::sync::Arc;

use calendar_contracts::{CreateEventRequest, Event, UpdateEventRequest};
use calendar_storage::{CreateEvent, EventRow, EventStore, Result, UpdateEvent};
use chrono::Utc;

pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, req: CreateEventRequest) -> Result<Event> {
        // created_at is stamped here, not by the store.
        let input = CreateEvent {
            created_by: req.created_by,
            created_at: Utc::now(),
            title: req.title,
            description: req.description,
            event_time: req.event_time,
            remind_at: req.remind_at,
        };
        let row = self.store.create(input).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn get(&self, id: i64) -> Result<Event> {
        let row = self.store.get_by_id(id).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = self.store.get_all().await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn update(&self, id: i64, req: UpdateEventRequest) -> Result<Event> {
        let input = UpdateEvent {
            title: req.title,
            description: req.description,
            event_time: req.event_time,
            remind_at: req.remind_at,
        };
        let row = self.store.update(id, input).await?;
        Ok(Self::row_to_event(row))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id).await
    }

    fn row_to_event(row: EventRow) -> Event {
        Event {
            id: row.id,
            created_by: row.created_by,
            created_at: row.created_at,
            title: row.title,
            description: row.description,
            event_time: row.event_time,
            remind_at: row.remind_at,
        }
    }
}

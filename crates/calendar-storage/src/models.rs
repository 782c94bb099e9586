// Storage models for events

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Stored event record
///
/// Column-for-column the `events` table row. Only `title`, `description`,
/// `event_time` and `remind_at` are mutable after creation.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub event_time: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
}

/// Input for EventStore::create
///
/// `created_at` is stamped by the caller layer before the store sees it;
/// the store assigns `id`.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub event_time: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
}

/// Input for EventStore::update: the four mutable fields, replaced wholesale
#[derive(Debug, Clone)]
pub struct UpdateEvent {
    pub title: String,
    pub description: String,
    pub event_time: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
}

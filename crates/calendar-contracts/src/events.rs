// Event DTOs for the public API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A calendar event as it appears on the wire
///
/// `id` and `created_at` are system-assigned at creation and never change
/// afterwards; `created_by` is an opaque caller-supplied string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: i64,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    pub event_time: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
}

/// Request body for POST /events
///
/// `event_time` and `remind_at` are required; the text fields default to
/// empty strings when omitted. Any `id`/`created_at` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_time: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
}

/// Request body for PUT /events/{id}
///
/// Carries the four mutable fields. The path id is authoritative; an id in
/// the body is ignored, as are `created_by`/`created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_time: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
}

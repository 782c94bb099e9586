// Event CRUD HTTP routes
//
// Error mapping contract: malformed bodies and non-numeric path ids are 400,
// GET /events/{id} turns every storage failure into 404, and the remaining
// routes surface storage failures (not-found included) as 500. Failure
// bodies carry the error text as plain text.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use calendar_contracts::{CreateEventRequest, Event, UpdateEventRequest};
use calendar_storage::EventStore;
use std::sync::Arc;

use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            service: Arc::new(EventService::new(store)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

/// POST /events - Create a new event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage error")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), (StatusCode, String)> {
    let Json(req) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    let event = state.service.create(req).await.map_err(|e| {
        tracing::error!("Failed to create event: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events - List all events
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "List of events", body = [Event]),
        (status = 500, description = "Storage error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, (StatusCode, String)> {
    let events = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list events: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(events))
}

/// GET /events/{id} - Get event by ID
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Event>, (StatusCode, String)> {
    // This route alone maps every storage failure to 404.
    let event = state
        .service
        .get(id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(event))
}

/// PUT /events/{id} - Replace the mutable fields of an event
#[utoipa::path(
    put,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 400, description = "Non-numeric id or malformed body"),
        (status = 500, description = "Storage error, including a missing id")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<Event>, (StatusCode, String)> {
    let Json(req) = payload.map_err(|e| (StatusCode::BAD_REQUEST, e.body_text()))?;

    // The path id is authoritative; any id in the body was never decoded.
    let event = state.service.update(id, req).await.map_err(|e| {
        tracing::error!("Failed to update event {}: {}", id, e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(event))
}

/// DELETE /events/{id} - Delete an event
#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 400, description = "Non-numeric id"),
        (status = 500, description = "Storage error, including a missing id")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.service.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete event {}: {}", id, e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(StatusCode::NO_CONTENT)
}

// Calendar API server
// Decision: the storage backend is chosen once at startup and injected into
// the handler layer as a trait object; handlers never name a concrete store.

mod config;
mod events;
mod services;

use anyhow::{Context, Result};
use axum::{extract::State, routing::get, Json, Router};
use calendar_contracts::{CreateEventRequest, Event, UpdateEventRequest};
use calendar_storage::{EventStore, InMemoryEventStore, PgEventStore};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{StoreConfig, StoreMode};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    store_mode: String,
}

/// State for the health endpoint
#[derive(Clone)]
struct HealthState {
    store_mode: String,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store_mode: state.store_mode.clone(),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        events::create_event,
        events::list_events,
        events::get_event,
        events::update_event,
        events::delete_event,
    ),
    components(
        schemas(Event, CreateEventRequest, UpdateEventRequest)
    ),
    tags(
        (name = "events", description = "Calendar event management endpoints")
    ),
    info(
        title = "Calendar API",
        version = "0.1.0",
        description = "CRUD API for calendar events",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calendar_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("calendar-api starting...");

    // Construct the selected store; a failed connection or liveness probe
    // aborts startup.
    let store_config = StoreConfig::from_env()?;
    let store: Arc<dyn EventStore> = match store_config.mode {
        StoreMode::Postgres => {
            let store = PgEventStore::connect(&store_config.database_url())
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");
            Arc::new(store)
        }
        StoreMode::Memory => {
            tracing::info!("Using in-memory event store (non-persistent)");
            Arc::new(InMemoryEventStore::new())
        }
    };

    let events_state = events::AppState::new(store);
    let health_state = HealthState {
        store_mode: format!("{:?}", store_config.mode),
    };

    let app = Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(events::routes(events_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = "0.0.0.0:8080";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

// Storage layer for calendar events
//
// This crate provides the EventStore trait plus two implementations:
// - PgEventStore: Postgres persistence via sqlx
// - InMemoryEventStore: lock-guarded map with identical observable behavior,
//   used in tests and database-free runs

pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::InMemoryEventStore;
pub use models::*;
pub use postgres::PgEventStore;
pub use traits::EventStore;

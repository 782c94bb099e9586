// Public wire DTOs for the calendar API

pub mod events;

pub use events::{CreateEventRequest, Event, UpdateEventRequest};

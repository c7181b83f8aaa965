use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    event::{register_event, show_event, show_event_stats, show_upcoming_events},
    registration::{cancel_registration, register_for_event},
};

pub fn build_event_routers() -> Router<AppRegistry> {
    let event_routers = Router::new()
        .route("/", post(register_event))
        .route("/upcoming", get(show_upcoming_events))
        .route("/:event_id", get(show_event))
        .route("/:event_id/stats", get(show_event_stats))
        .route("/:event_id/register", post(register_for_event))
        .route("/:event_id/register", delete(cancel_registration));

    Router::new().nest("/events", event_routers)
}

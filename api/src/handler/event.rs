use crate::model::event::{
    CreateEventRequest, EventDetailResponse, EventResponse, EventStatsResponse,
    UpcomingEventsResponse,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::EventId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_event(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEventRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate()?;

    registry
        .event_repository()
        .create(req.into())
        .await
        .map(EventResponse::from)
        .map(|res| (StatusCode::CREATED, Json(res)))
}

pub async fn show_upcoming_events(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UpcomingEventsResponse>> {
    registry
        .event_repository()
        .find_upcoming()
        .await
        .map(UpcomingEventsResponse::from)
        .map(Json)
}

pub async fn show_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventDetailResponse>> {
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("event not found".into()))?;

    let registrants = registry
        .registration_repository()
        .find_registrants(event_id)
        .await?;

    Ok(Json(EventDetailResponse::new(event, registrants)))
}

pub async fn show_event_stats(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventStatsResponse>> {
    registry
        .event_repository()
        .stats(event_id)
        .await
        .and_then(|stats| match stats {
            Some(stats) => Ok(Json(EventStatsResponse::from(stats))),
            None => Err(AppError::EntityNotFound("event not found".into())),
        })
}

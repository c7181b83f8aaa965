use crate::model::registration::{RegisterRequest, RegistrationResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::{
    id::EventId,
    registration::event::{CreateRegistration, DeleteRegistration},
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_for_event(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<RegistrationResponse>> {
    registry
        .registration_repository()
        .register(CreateRegistration::new(req.user_id, event_id))
        .await
        .map(RegistrationResponse::from)
        .map(Json)
}

pub async fn cancel_registration(
    Path(event_id): Path<EventId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<StatusCode> {
    registry
        .registration_repository()
        .cancel(DeleteRegistration::new(req.user_id, event_id))
        .await
        .map(|_| StatusCode::OK)
}

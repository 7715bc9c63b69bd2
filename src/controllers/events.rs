use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::{JsonBody, PathId},
    schemas::EventPayload,
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

// GET /events
async fn list_events(State(state): State<Arc<AppState>>) -> AppResult<impl IntoResponse> {
    let events = state.events.list().await?;
    Ok(Json(events))
}

// GET /events/{id}
async fn get_event(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    let event = state.events.get(id).await?;
    Ok(Json(event))
}

// POST /events
async fn create_event(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<EventPayload>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

// PUT /events/{id}
async fn update_event(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    JsonBody(payload): JsonBody<EventPayload>,
) -> AppResult<impl IntoResponse> {
    let event = state.events.update(id, payload).await?;
    Ok(Json(event))
}

// DELETE /events/{id}
async fn delete_event(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    state.events.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::{JsonBody, PathId},
    schemas::CreateTicketRequest,
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tickets", post(create_ticket))
        // {id} здесь - id события
        .route("/tickets/{id}", get(list_event_tickets))
        .route("/tickets/{id}/use", put(use_ticket))
}

// POST /tickets
async fn create_ticket(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTicketRequest>,
) -> AppResult<impl IntoResponse> {
    let ticket = state.tickets.create(req).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

// GET /tickets/{eventId}
async fn list_event_tickets(
    State(state): State<Arc<AppState>>,
    PathId(event_id): PathId,
) -> AppResult<impl IntoResponse> {
    let tickets = state.tickets.list_by_event(event_id).await?;
    Ok(Json(tickets))
}

// PUT /tickets/{id}/use
async fn use_ticket(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> AppResult<impl IntoResponse> {
    let ticket = state.tickets.use_ticket(id).await?;
    Ok(Json(ticket))
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

// GET /health - процесс жив; база не опрашивается
async fn health() -> &'static str {
    "OK"
}

pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod schemas;
pub mod services;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub config: config::Config,
    pub events: services::EventService,
    pub tickets: services::TicketService,
}

impl AppState {
    /// Подключается к базе и применяет миграции.
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = database::Database::new(&config.database).await?;
        tracing::info!("Database connected");

        db.run_migrations().await?;

        Ok(Arc::new(Self::from_database(db, config)))
    }

    pub fn from_database(db: database::Database, config: config::Config) -> Self {
        Self {
            events: services::EventService::new(db.clone()),
            tickets: services::TicketService::new(db.clone()),
            db,
            config,
        }
    }
}

/// Собирает HTTP-приложение со всеми маршрутами и слоями.
pub fn app(state: impl Into<Arc<AppState>>) -> Router {
    let state = state.into();
    let cors = config::create_cors_layer(&state.config.cors);

    Router::new()
        .merge(controllers::routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

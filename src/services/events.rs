use tracing::{debug, info};
use validator::Validate;

use crate::{
    database::{self, Database},
    error::{AppError, AppResult},
    models::Event,
    schemas::EventPayload,
};

use super::conflict_on_unique;

#[derive(Clone)]
pub struct EventService {
    db: Database,
}

fn duplicate_name(name: &str) -> String {
    format!("Event with name '{}' already exists", name)
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Event {} not found", id))
}

impl EventService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<Event>> {
        let events = Event::find_all(&self.db).await?;
        debug!("Loaded {} events", events.len());
        Ok(events)
    }

    pub async fn get(&self, id: i64) -> AppResult<Event> {
        Event::find_by_id(id, &self.db)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, payload: EventPayload) -> AppResult<Event> {
        payload.validate()?;

        if Event::name_taken(&payload.name, None, &self.db).await? {
            return Err(AppError::Conflict(duplicate_name(&payload.name)));
        }

        let event = Event::insert(&payload.name, payload.date, &self.db)
            .await
            .map_err(|e| conflict_on_unique(e, duplicate_name(&payload.name)))?;

        info!(event_id = event.id, name = %event.name, "Event created");
        Ok(event)
    }

    pub async fn update(&self, id: i64, payload: EventPayload) -> AppResult<Event> {
        if Event::find_by_id(id, &self.db).await?.is_none() {
            return Err(not_found(id));
        }

        payload.validate()?;

        if Event::name_taken(&payload.name, Some(id), &self.db).await? {
            return Err(AppError::Conflict(duplicate_name(&payload.name)));
        }

        // Событие могли удалить между проверкой и обновлением
        let event = Event::update(id, &payload.name, payload.date, &self.db)
            .await
            .map_err(|e| conflict_on_unique(e, duplicate_name(&payload.name)))?
            .ok_or_else(|| not_found(id))?;

        info!(event_id = event.id, "Event updated");
        Ok(event)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = Event::delete(id, &self.db).await.map_err(|e| {
            if database::is_foreign_key_violation(&e) {
                AppError::Conflict(format!("Event {} still has tickets", id))
            } else {
                AppError::Database(e)
            }
        })?;

        if !deleted {
            return Err(not_found(id));
        }

        info!(event_id = id, "Event deleted");
        Ok(())
    }
}

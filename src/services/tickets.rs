//! Выдача и погашение билетов.
//!
//! Правила:
//! - билет выдаётся только на существующее и ещё не прошедшее событие;
//! - код билета уникален в пределах события;
//! - билет гасится ровно один раз и только пока событие не прошло.

use chrono::Utc;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::{
    database::Database,
    error::{AppError, AppResult},
    models::{Event, Ticket},
    schemas::CreateTicketRequest,
};

use super::conflict_on_unique;

const ALREADY_USED: &str = "Ticket has already been used";
const EVENT_PASSED: &str = "Event has already happened";

#[derive(Clone)]
pub struct TicketService {
    db: Database,
}

fn duplicate_code(code: &str, event_id: i64) -> String {
    format!("Ticket with code '{}' already exists for event {}", code, event_id)
}

impl TicketService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateTicketRequest) -> AppResult<Ticket> {
        req.validate()?;

        let event = Event::find_by_id(req.event_id, &self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", req.event_id)))?;

        if event.has_passed(Utc::now()) {
            warn!(event_id = event.id, "Refusing to issue ticket for past event");
            return Err(AppError::Forbidden(EVENT_PASSED.to_string()));
        }

        if Ticket::code_taken(event.id, &req.code, &self.db).await? {
            return Err(AppError::Conflict(duplicate_code(&req.code, event.id)));
        }

        let ticket = Ticket::insert(event.id, &req.code, &req.owner, &self.db)
            .await
            .map_err(|e| conflict_on_unique(e, duplicate_code(&req.code, event.id)))?;

        info!(ticket_id = ticket.id, event_id = ticket.event_id, "Ticket issued");
        Ok(ticket)
    }

    /// Неизвестное событие - просто пустой список.
    pub async fn list_by_event(&self, event_id: i64) -> AppResult<Vec<Ticket>> {
        let tickets = Ticket::find_by_event(event_id, &self.db).await?;
        debug!(event_id, "Loaded {} tickets", tickets.len());
        Ok(tickets)
    }

    pub async fn use_ticket(&self, id: i64) -> AppResult<Ticket> {
        let ticket = Ticket::find_by_id(id, &self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", id)))?;

        if ticket.used {
            return Err(AppError::Forbidden(ALREADY_USED.to_string()));
        }

        let now = Utc::now();
        let event = Event::find_by_id(ticket.event_id, &self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", ticket.event_id)))?;

        if event.has_passed(now) {
            return Err(AppError::Forbidden(EVENT_PASSED.to_string()));
        }

        // Проверки выше не атомарны, окончательное решение за условным UPDATE
        match Ticket::mark_used(id, now, &self.db).await? {
            Some(used) => {
                info!(ticket_id = used.id, event_id = used.event_id, "Ticket used");
                Ok(used)
            }
            None => {
                warn!(ticket_id = id, "Ticket was redeemed concurrently");
                Err(AppError::Forbidden(ALREADY_USED.to_string()))
            }
        }
    }
}

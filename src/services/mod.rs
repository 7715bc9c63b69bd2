pub mod events;
pub mod tickets;

pub use events::EventService;
pub use tickets::TicketService;

use crate::{database, error::AppError};

// UNIQUE-нарушение при вставке после успешной предпроверки = гонка двух запросов
pub(crate) fn conflict_on_unique(err: sqlx::Error, message: impl Into<String>) -> AppError {
    if database::is_unique_violation(&err) {
        AppError::Conflict(message.into())
    } else {
        AppError::Database(err)
    }
}

//! Входные DTO и правила их проверки.
//!
//! Структура JSON (обязательные поля, типы) проверяется при десериализации,
//! смысловые правила (непустые строки, дата в будущем) - через `validator`.

pub mod events;
pub mod tickets;

pub use events::EventPayload;
pub use tickets::CreateTicketRequest;

use chrono::{DateTime, Utc};
use validator::ValidationError;

pub const MAX_TEXT_LEN: u64 = 255;

// Непустая строка без NUL: Postgres не хранит '\0' в TEXT
pub(crate) fn valid_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    if value.contains('\0') {
        return Err(ValidationError::new("nul_char").with_message("must not contain NUL characters".into()));
    }
    Ok(())
}

pub(crate) fn in_future(date: &DateTime<Utc>) -> Result<(), ValidationError> {
    if *date <= Utc::now() {
        return Err(ValidationError::new("not_in_future").with_message("must be in the future".into()));
    }
    Ok(())
}

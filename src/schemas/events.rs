use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use super::{in_future, valid_text, MAX_TEXT_LEN};

/// Тело POST /events и PUT /events/:id.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EventPayload {
    #[validate(length(max = MAX_TEXT_LEN), custom(function = "valid_text"))]
    pub name: String,
    #[serde(deserialize_with = "crate::models::deserialize_iso_date")]
    #[validate(custom(function = "in_future"))]
    pub date: DateTime<Utc>,
}

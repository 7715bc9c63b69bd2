use serde::Deserialize;
use validator::Validate;

use super::{valid_text, MAX_TEXT_LEN};

/// Тело POST /tickets.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[validate(length(max = MAX_TEXT_LEN), custom(function = "valid_text"))]
    pub code: String,
    #[validate(length(max = MAX_TEXT_LEN), custom(function = "valid_text"))]
    pub owner: String,
    #[validate(range(min = 1))]
    pub event_id: i64,
}

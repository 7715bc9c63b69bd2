use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::Database;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub code: String,
    pub owner: String,
    pub event_id: i64,
    pub used: bool,
}

impl Ticket {
    pub async fn find_by_id(id: i64, db: &Database) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            "SELECT id, code, owner, event_id, used FROM tickets WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&db.pool)
        .await
    }

    pub async fn find_by_event(event_id: i64, db: &Database) -> Result<Vec<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            "SELECT id, code, owner, event_id, used FROM tickets WHERE event_id = $1 ORDER BY id"
        )
        .bind(event_id)
        .fetch_all(&db.pool)
        .await
    }

    // Код уникален только в пределах события
    pub async fn code_taken(event_id: i64, code: &str, db: &Database) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tickets WHERE event_id = $1 AND code = $2)"
        )
        .bind(event_id)
        .bind(code)
        .fetch_one(&db.pool)
        .await
    }

    pub async fn insert(
        event_id: i64,
        code: &str,
        owner: &str,
        db: &Database,
    ) -> Result<Ticket, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (code, owner, event_id, used)
             VALUES ($1, $2, $3, FALSE)
             RETURNING id, code, owner, event_id, used"
        )
        .bind(code)
        .bind(owner)
        .bind(event_id)
        .fetch_one(&db.pool)
        .await
    }

    /// Атомарно гасит билет. `None` - билет уже использован или событие прошло
    /// к моменту обновления.
    pub async fn mark_used(
        id: i64,
        now: DateTime<Utc>,
        db: &Database,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets t
            SET used = TRUE
            WHERE t.id = $1
              AND t.used = FALSE
              AND EXISTS(SELECT 1 FROM events e WHERE e.id = t.event_id AND e.date > $2)
            RETURNING t.id, t.code, t.owner, t.event_id, t.used
            "#
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&db.pool)
        .await
    }
}

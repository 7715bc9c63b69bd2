use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::database::Database;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(serialize_with = "super::serialize_iso_millis")]
    pub date: DateTime<Utc>,
}

impl Event {
    /// Событие уже прошло (или идёт прямо сейчас).
    pub fn has_passed(&self, now: DateTime<Utc>) -> bool {
        self.date <= now
    }

    pub async fn find_all(db: &Database) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT id, name, date FROM events ORDER BY id")
            .fetch_all(&db.pool)
            .await
    }

    pub async fn find_by_id(id: i64, db: &Database) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT id, name, date FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&db.pool)
            .await
    }

    // Занято ли имя другим событием (exclude_id - само обновляемое событие)
    pub async fn name_taken(
        name: &str,
        exclude_id: Option<i64>,
        db: &Database,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM events WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))"
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&db.pool)
        .await
    }

    pub async fn insert(name: &str, date: DateTime<Utc>, db: &Database) -> Result<Event, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, date) VALUES ($1, $2) RETURNING id, name, date"
        )
        .bind(name)
        .bind(date)
        .fetch_one(&db.pool)
        .await
    }

    pub async fn update(
        id: i64,
        name: &str,
        date: DateTime<Utc>,
        db: &Database,
    ) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET name = $2, date = $3 WHERE id = $1 RETURNING id, name, date"
        )
        .bind(id)
        .bind(name)
        .bind(date)
        .fetch_optional(&db.pool)
        .await
    }

    /// Возвращает `false`, если удалять было нечего.
    pub async fn delete(id: i64, db: &Database) -> Result<bool, sqlx::Error> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&db.pool)
            .await
            .map(|r| r.rows_affected() > 0)
    }
}

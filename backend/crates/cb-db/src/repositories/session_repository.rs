use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use cb_core::Session;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &Session) -> DbErrorResult<()> {
        let user_id = session.user_id.to_string();
        let created_at = session.created_at.timestamp();
        let expires_at = session.expires_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO sessions (token, user_id, created_at, expires_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&session.token)
        .bind(user_id)
        .bind(created_at)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find(&self, token: &str) -> DbErrorResult<Option<Session>> {
        let row = sqlx::query(
            r#"
              SELECT token, user_id, created_at, expires_at
              FROM sessions
              WHERE token = ?
              "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| -> DbErrorResult<Session> {
            let user_id: String = r.try_get("user_id")?;
            Ok(Session {
                token: r.try_get("token")?,
                user_id: parse_uuid(&user_id, "sessions.user_id")?,
                created_at: parse_timestamp(r.try_get("created_at")?, "sessions.created_at")?,
                expires_at: parse_timestamp(r.try_get("expires_at")?, "sessions.expires_at")?,
            })
        })
        .transpose()
    }

    /// Returns whether a row was removed
    pub async fn delete(&self, token: &str) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

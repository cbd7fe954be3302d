use crate::Result as DbErrorResult;
use crate::repositories::{parse_timestamp, parse_uuid};

use cb_core::User;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    ///
    /// A second user with the same email is rejected by the UNIQUE constraint and
    /// surfaces as `DbError::ConstraintViolation`; there is no separate existence
    /// check.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO users (id, name, email, password_hash, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.password_hash.as_deref())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, name, email, password_hash, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
              SELECT id, name, email, password_hash, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: parse_uuid(&id, "users.id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        created_at: parse_timestamp(created_at, "users.created_at")?,
    })
}

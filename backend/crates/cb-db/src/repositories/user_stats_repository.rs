use crate::Result as DbErrorResult;
use crate::repositories::parse_uuid;

use cb_core::{LeaderboardEntry, Score, UserStats};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserStatsRepository {
    pool: SqlitePool,
}

impl UserStatsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fold one finished game into the user's running stats.
    ///
    /// Creates the row on the first game. Increment, sum and max happen inside a
    /// single upsert, so concurrent submissions for the same user serialize on the
    /// row and none of them is lost.
    pub async fn record_result(&self, user_id: Uuid, score: Score) -> DbErrorResult<UserStats> {
        let user_id_str = user_id.to_string();
        let score = score.value();

        let row = sqlx::query(
            r#"
              INSERT INTO user_stats (user_id, games_played, total_clicks, best_score)
              VALUES (?, 1, ?, ?)
              ON CONFLICT(user_id) DO UPDATE SET
                  games_played = games_played + 1,
                  total_clicks = total_clicks + excluded.total_clicks,
                  best_score = MAX(best_score, excluded.best_score)
              RETURNING user_id, games_played, total_clicks, best_score
              "#,
        )
        .bind(user_id_str)
        .bind(score)
        .bind(score)
        .fetch_one(&self.pool)
        .await?;

        stats_from_row(&row)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Option<UserStats>> {
        let user_id_str = user_id.to_string();

        let row = sqlx::query(
            r#"
              SELECT user_id, games_played, total_clicks, best_score
              FROM user_stats
              WHERE user_id = ?
              "#,
        )
        .bind(user_id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(stats_from_row).transpose()
    }

    /// Best score per user, highest first. Equal scores keep registration order.
    pub async fn top_scores(&self, limit: u32) -> DbErrorResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query(
            r#"
              SELECT u.name, s.best_score
              FROM user_stats s
              JOIN users u ON u.id = s.user_id
              ORDER BY s.best_score DESC, u.rowid ASC
              LIMIT ?
              "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| -> DbErrorResult<LeaderboardEntry> {
                Ok(LeaderboardEntry {
                    name: r.try_get("name")?,
                    best_score: r.try_get("best_score")?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

fn stats_from_row(row: &SqliteRow) -> DbErrorResult<UserStats> {
    let user_id: String = row.try_get("user_id")?;

    Ok(UserStats {
        user_id: parse_uuid(&user_id, "user_stats.user_id")?,
        games_played: row.try_get("games_played")?,
        total_clicks: row.try_get("total_clicks")?,
        best_score: row.try_get("best_score")?,
    })
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Running aggregate of every game a user has submitted.
///
/// `games_played` counts submissions, `total_clicks` sums their scores and
/// `best_score` is the maximum score seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: Uuid,
    pub games_played: i64,
    pub total_clicks: i64,
    pub best_score: i64,
}

impl UserStats {
    /// Stats for a user that has not finished a game yet
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            games_played: 0,
            total_clicks: 0,
            best_score: 0,
        }
    }

    /// Mean clicks per game, 0.0 before the first game
    pub fn average_clicks(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_clicks as f64 / self.games_played as f64
    }
}

use cb_core::UserStats;

use serde::Serialize;

/// Running totals as shown to the player
#[derive(Debug, Clone, Serialize)]
pub struct StatsDto {
    pub games_played: i64,
    pub total_clicks: i64,
    pub best_score: i64,
    /// Mean clicks per game, rendered with two decimals
    pub average_clicks: String,
}

impl From<UserStats> for StatsDto {
    fn from(stats: UserStats) -> Self {
        Self {
            games_played: stats.games_played,
            total_clicks: stats.total_clicks,
            best_score: stats.best_score,
            average_clicks: format!("{:.2}", stats.average_clicks()),
        }
    }
}

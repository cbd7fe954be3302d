use cb_core::LeaderboardEntry;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryDto {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub best_score: i64,
}

impl LeaderboardEntryDto {
    pub fn ranked(rank: usize, entry: LeaderboardEntry) -> Self {
        Self {
            rank,
            name: entry.name,
            best_score: entry.best_score,
        }
    }
}

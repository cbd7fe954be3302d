//! Top scores across all players

use crate::{AppState, CurrentUser, LeaderboardEntryDto, LeaderboardResponse};

use cb_db::UserStatsRepository;

use axum::{Json, extract::State};

/// GET /leaderboard
///
/// Best scores, highest first, capped at the configured size. A storage
/// failure yields an empty board.
pub async fn get_leaderboard(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> Json<LeaderboardResponse> {
    let repo = UserStatsRepository::new(state.pool.clone());

    let entries = match repo.top_scores(state.leaderboard_size).await {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Failed to load leaderboard: {}", e);
            Vec::new()
        }
    };

    Json(LeaderboardResponse {
        entries: entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardEntryDto::ranked(i + 1, entry))
            .collect(),
    })
}

//! Game result submission

use crate::api::validation::validate_score;
use crate::{ApiResult, AppState, CurrentUser, StatsDto, StatsResponse, SubmitGameRequest};

use cb_db::UserStatsRepository;

use axum::{Json, extract::State};

/// POST /game
///
/// Fold one finished game into the caller's stats and return the new totals.
pub async fn submit_game(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(req): Json<SubmitGameRequest>,
) -> ApiResult<Json<StatsResponse>> {
    let score = validate_score(req.score, &state.validation)?;

    let repo = UserStatsRepository::new(state.pool.clone());
    let stats = repo.record_result(user.user_id, score).await?;

    log::debug!(
        "User {} scored {} (games: {}, best: {})",
        user.user_id,
        score,
        stats.games_played,
        stats.best_score
    );

    Ok(Json(StatsResponse {
        stats: StatsDto::from(stats),
    }))
}

//! Personal stats page

use crate::{AppState, CurrentUser, DashboardResponse, StatsDto};

use cb_core::UserStats;
use cb_db::{UserRepository, UserStatsRepository};

use axum::{Json, extract::State};
use log::error;

/// GET /dashboard
///
/// Storage failures are logged and rendered as an empty dashboard rather
/// than an error page.
pub async fn get_dashboard(
    user: CurrentUser,
    State(state): State<AppState>,
) -> Json<DashboardResponse> {
    let name = match UserRepository::new(state.pool.clone())
        .find_by_id(user.user_id)
        .await
    {
        Ok(found) => found.map(|u| u.name),
        Err(e) => {
            error!("Failed to load user {}: {}", user.user_id, e);
            None
        }
    };

    let stats = match UserStatsRepository::new(state.pool.clone())
        .find_by_user(user.user_id)
        .await
    {
        Ok(found) => found.unwrap_or_else(|| UserStats::empty(user.user_id)),
        Err(e) => {
            error!("Failed to load stats for user {}: {}", user.user_id, e);
            UserStats::empty(user.user_id)
        }
    };

    Json(DashboardResponse {
        user_id: user.user_id.to_string(),
        name,
        stats: StatsDto::from(stats),
    })
}

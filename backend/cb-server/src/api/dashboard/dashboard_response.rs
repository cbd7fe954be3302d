use crate::StatsDto;

use serde::Serialize;

/// The signed-in player's own page
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user_id: String,
    /// `None` when the account could not be loaded
    pub name: Option<String>,
    pub stats: StatsDto,
}

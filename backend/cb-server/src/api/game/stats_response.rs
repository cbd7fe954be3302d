use crate::StatsDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: StatsDto,
}

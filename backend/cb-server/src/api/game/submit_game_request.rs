use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitGameRequest {
    /// Clicks counted in the finished game
    pub score: i64,
}

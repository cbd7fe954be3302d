pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::leaderboard_entry::LeaderboardEntry;
pub use models::score::Score;
pub use models::session::Session;
pub use models::user::User;
pub use models::user_stats::UserStats;

#[cfg(test)]
mod tests;

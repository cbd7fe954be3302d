pub mod leaderboard_entry;
pub mod score;
pub mod session;
pub mod user;
pub mod user_stats;

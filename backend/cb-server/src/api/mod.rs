pub mod auth;
pub mod dashboard;
pub mod error;
pub mod extractors;
pub mod game;
pub mod home;
pub mod leaderboard;
pub mod validation;

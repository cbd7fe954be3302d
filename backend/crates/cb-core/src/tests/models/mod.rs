mod score;
mod session;
mod user;
mod user_stats;

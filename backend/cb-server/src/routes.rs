use crate::{
    AppState, get_dashboard, get_leaderboard, health, home, login, login_form, logout, register,
    register_form, submit_game,
};

use axum::{
    Router,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        // Guest pages
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        // Session pages
        .route("/logout", post(logout))
        .route("/game", post(submit_game))
        .route("/dashboard", get(get_dashboard))
        .route("/leaderboard", get(get_leaderboard))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}

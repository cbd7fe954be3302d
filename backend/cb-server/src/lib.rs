pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod maintenance;
pub mod routes;
pub mod shutdown;


pub use api::{
    auth::{
        auth::{login, login_form, logout, register, register_form},
        form_response::FormResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    dashboard::{dashboard::get_dashboard, dashboard_response::DashboardResponse},
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_user::CurrentUser, guest::Guest, session_cookie::CookieSettings},
    game::{
        game::submit_game, stats_dto::StatsDto, stats_response::StatsResponse,
        submit_game_request::SubmitGameRequest,
    },
    home::home,
    leaderboard::{
        leaderboard::get_leaderboard, leaderboard_entry_dto::LeaderboardEntryDto,
        leaderboard_response::LeaderboardResponse,
    },
};
pub use app_state::AppState;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};

pub use crate::routes::build_router;

#[allow(clippy::module_inception)]
pub mod game;
pub mod stats_dto;
pub mod stats_response;
pub mod submit_game_request;

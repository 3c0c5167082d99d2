use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod prompt;
pub mod repo;
pub mod repo_types;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::generate_routes())
        .merge(handlers::history_routes())
}

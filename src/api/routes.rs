use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    matches::add_match, players::add_player, rounds::confirm_round, standings::get_standings, AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/standings", get(get_standings))
        .route("/api/players", post(add_player))
        .route("/api/matches", post(add_match))
        .route("/api/rounds/confirm", post(confirm_round))
        .with_state(state)
}

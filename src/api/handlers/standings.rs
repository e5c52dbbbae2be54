use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{internal_error, run_blocking, AppState};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let league = state.league.clone();
    match run_blocking(move || league.standings()).await {
        Ok(Ok(standings)) => Json(standings).into_response(),
        Ok(Err(err)) => internal_error("Failed to load standings", &err),
        Err(response) => response,
    }
}

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{internal_error, run_blocking, AppState};
use crate::api::models::RoundResponse;
use crate::league::RoundError;

pub async fn confirm_round(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let league = state.league.clone();
    let result = match run_blocking(move || league.confirm_pending()).await {
        Ok(result) => result,
        Err(response) => return response,
    };

    match result {
        Ok(round) => {
            let message = if round.is_confirmed() {
                "Round confirmed"
            } else {
                "Round not yet complete"
            };
            Json(RoundResponse {
                message: message.to_string(),
                round,
            })
            .into_response()
        }
        Err(RoundError::Integrity(err)) => internal_error("Confirmation refused corrupt match data", &err),
        Err(RoundError::Store(err)) => internal_error("Confirmation pass failed", &err),
    }
}

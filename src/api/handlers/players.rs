use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{internal_error, message_response, run_blocking, AppState};
use crate::api::models::{PlayerAddedResponse, PlayerForm};
use crate::league::RegistrationError;

pub async fn add_player(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PlayerForm>,
) -> impl IntoResponse {
    let league = state.league.clone();
    let result = match run_blocking(move || league.register_player(&form.playername)).await {
        Ok(result) => result,
        Err(response) => return response,
    };

    match result {
        Ok(player) => (
            StatusCode::CREATED,
            Json(PlayerAddedResponse {
                message: "Player added".to_string(),
                player,
            }),
        )
            .into_response(),
        Err(err @ RegistrationError::EmptyName) => {
            message_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        Err(err @ RegistrationError::LeagueStarted) => message_response(StatusCode::CONFLICT, err.to_string()),
        Err(RegistrationError::Store(err)) => internal_error("Failed to register player", &err),
    }
}

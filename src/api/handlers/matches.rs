use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{internal_error, message_response, run_blocking, AppState};
use crate::api::models::{MatchAddedResponse, MatchForm};
use crate::league::{IntakeError, MatchReport, RoundError};

pub async fn add_match(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MatchForm>,
) -> impl IntoResponse {
    let report = match MatchReport::parse(&form.p1id, &form.p2id, &form.score1, &form.score2) {
        Ok(report) => report,
        Err(err) => return message_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
    };

    let league = state.league.clone();
    let result = match run_blocking(move || league.report_match(&report)).await {
        Ok(result) => result,
        Err(response) => return response,
    };

    match result {
        Ok(outcome) => {
            let message = if outcome.round.is_confirmed() {
                "Match added, round confirmed"
            } else {
                "Match added"
            };
            (
                StatusCode::CREATED,
                Json(MatchAddedResponse {
                    message: message.to_string(),
                    recorded: outcome.recorded,
                    round: outcome.round,
                }),
            )
                .into_response()
        }
        Err(IntakeError::Validation(err)) => message_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
        Err(IntakeError::Round(RoundError::Integrity(err))) => {
            internal_error("Confirmation refused corrupt match data", &err)
        }
        Err(IntakeError::Round(RoundError::Store(err)) | IntakeError::Store(err)) => {
            internal_error("Failed to record match", &err)
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::api::models::MessageResponse;
use crate::services::league::LeagueService;

pub mod matches;
pub mod players;
pub mod rounds;
pub mod standings;

pub struct AppState {
    pub league: LeagueService,
}

pub(crate) fn message_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(MessageResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

pub(crate) fn internal_error(context: &str, err: &dyn std::fmt::Display) -> Response {
    log::error!("{context}: {err:#}");
    message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error, please retry")
}

/// SQLite calls block, and a writer may wait on the busy timeout, so they
/// run on the blocking pool.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, Response>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| internal_error("Blocking task failed", &e))
}

use serde::{Deserialize, Serialize};

use crate::league::{Match, Player, RoundOutcome};

#[derive(Deserialize)]
pub struct PlayerForm {
    #[serde(default)]
    pub playername: String,
}

/// Raw form fields; parsing happens in intake so that bad numbers get the
/// same messages as the other validation failures.
#[derive(Deserialize)]
pub struct MatchForm {
    #[serde(default)]
    pub p1id: String,
    #[serde(default)]
    pub p2id: String,
    #[serde(default)]
    pub score1: String,
    #[serde(default)]
    pub score2: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct PlayerAddedResponse {
    pub message: String,
    pub player: Player,
}

#[derive(Serialize)]
pub struct MatchAddedResponse {
    pub message: String,
    pub recorded: Match,
    pub round: RoundOutcome,
}

#[derive(Serialize)]
pub struct RoundResponse {
    pub message: String,
    pub round: RoundOutcome,
}

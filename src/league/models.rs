use chrono::NaiveDateTime;
use serde::Serialize;

pub type PlayerId = i32;
pub type MatchId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: i64,
    pub created_at: Option<NaiveDateTime>,
}

/// A reported result between two players.
///
/// `confirmed` flips exactly once, when a round containing this match
/// resolves. Confirmed rows are never written again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub created_at: NaiveDateTime,
    pub player_one_id: PlayerId,
    pub player_two_id: PlayerId,
    pub player_one_score: i32,
    pub player_two_score: i32,
    pub confirmed: bool,
}

impl Match {
    /// Unordered pair key, lower id first.
    pub fn pair(&self) -> (PlayerId, PlayerId) {
        ordered_pair(self.player_one_id, self.player_two_id)
    }
}

pub fn ordered_pair(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Match row to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub player_one_id: PlayerId,
    pub player_two_id: PlayerId,
    pub player_one_score: i32,
    pub player_two_score: i32,
    pub created_at: NaiveDateTime,
}

// Read-side projections

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub id: MatchId,
    pub created_at: NaiveDateTime,
    pub player_one_id: PlayerId,
    pub player_one_name: String,
    pub player_one_score: i32,
    pub player_two_id: PlayerId,
    pub player_two_name: String,
    pub player_two_score: i32,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub players: Vec<Player>,
    pub confirmed_matches: Vec<MatchView>,
    pub pending_matches: Vec<MatchView>,
}

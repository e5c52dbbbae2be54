use thiserror::Error;

use super::models::{MatchId, PlayerId};

/// Rejections of a reported result. Nothing is written when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid first player")]
    InvalidFirstPlayer,
    #[error("invalid second player")]
    InvalidSecondPlayer,
    #[error("invalid first score")]
    InvalidFirstScore,
    #[error("invalid second score")]
    InvalidSecondScore,
    #[error("a player cannot play against themselves")]
    SelfMatch,
    #[error("draws are not allowed")]
    Draw,
    #[error("player {0} does not exist")]
    UnknownPlayer(PlayerId),
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("player name must not be empty")]
    EmptyName,
    #[error("cannot add a player once the league has started")]
    LeagueStarted,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Stored data the engine refuses to score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("match {match_id} pairs player {player_id} with themselves")]
    SelfMatch { match_id: MatchId, player_id: PlayerId },
    #[error("match {match_id} has equal scores ({score}-{score})")]
    EqualScores { match_id: MatchId, score: i32 },
    #[error("match {match_id} has a negative score")]
    NegativeScore { match_id: MatchId },
}

#[derive(Debug, Error)]
pub enum RoundError {
    #[error("round aborted: {0}")]
    Integrity(#[from] IntegrityViolation),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

use chrono::NaiveDateTime;
use log::info;
use serde::Serialize;

use super::engine::{self, RoundOutcome};
use super::error::{IntakeError, ValidationError};
use super::models::{Match, NewMatch, PlayerId};
use super::store::LeagueStore;

/// A result that passed the context-free checks. Player existence is
/// checked against the store when it is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    pub player_one_id: PlayerId,
    pub player_two_id: PlayerId,
    pub player_one_score: i32,
    pub player_two_score: i32,
}

impl MatchReport {
    /// Parses raw field values as they arrive from a form or the command line.
    pub fn parse(
        player_one: &str,
        player_two: &str,
        score_one: &str,
        score_two: &str,
    ) -> Result<Self, ValidationError> {
        let player_one_id = parse_non_negative(player_one).ok_or(ValidationError::InvalidFirstPlayer)?;
        let player_two_id = parse_non_negative(player_two).ok_or(ValidationError::InvalidSecondPlayer)?;
        let player_one_score = parse_non_negative(score_one).ok_or(ValidationError::InvalidFirstScore)?;
        let player_two_score = parse_non_negative(score_two).ok_or(ValidationError::InvalidSecondScore)?;

        Self::new(player_one_id, player_two_id, player_one_score, player_two_score)
    }

    pub fn new(
        player_one_id: PlayerId,
        player_two_id: PlayerId,
        player_one_score: i32,
        player_two_score: i32,
    ) -> Result<Self, ValidationError> {
        if player_one_id < 0 {
            return Err(ValidationError::InvalidFirstPlayer);
        }
        if player_two_id < 0 {
            return Err(ValidationError::InvalidSecondPlayer);
        }
        if player_one_score < 0 {
            return Err(ValidationError::InvalidFirstScore);
        }
        if player_two_score < 0 {
            return Err(ValidationError::InvalidSecondScore);
        }
        if player_one_id == player_two_id {
            return Err(ValidationError::SelfMatch);
        }
        if player_one_score == player_two_score {
            return Err(ValidationError::Draw);
        }

        Ok(Self {
            player_one_id,
            player_two_id,
            player_one_score,
            player_two_score,
        })
    }
}

fn parse_non_negative(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|value| *value >= 0)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeOutcome {
    pub recorded: Match,
    pub round: RoundOutcome,
}

/// Stores a validated report as pending and runs a confirmation pass on the
/// same store.
///
/// The caller owns the transaction: commit on `Ok`, roll back on `Err`.
pub fn record_match<S: LeagueStore + ?Sized>(
    store: &mut S,
    report: &MatchReport,
    reported_at: NaiveDateTime,
) -> Result<IntakeOutcome, IntakeError> {
    ensure_player_exists(store, report.player_one_id)?;
    ensure_player_exists(store, report.player_two_id)?;

    let recorded = store.insert_match(&NewMatch {
        player_one_id: report.player_one_id,
        player_two_id: report.player_two_id,
        player_one_score: report.player_one_score,
        player_two_score: report.player_two_score,
        created_at: reported_at,
    })?;
    info!(
        "Recorded match {}: player {} {} - {} player {}",
        recorded.id,
        recorded.player_one_id,
        recorded.player_one_score,
        recorded.player_two_score,
        recorded.player_two_id
    );

    let round = engine::confirm_round(store)?;

    Ok(IntakeOutcome { recorded, round })
}

fn ensure_player_exists<S: LeagueStore + ?Sized>(store: &mut S, id: PlayerId) -> Result<(), IntakeError> {
    match store.find_player(id)? {
        Some(_) => Ok(()),
        None => Err(ValidationError::UnknownPlayer(id).into()),
    }
}

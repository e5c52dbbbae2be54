use std::collections::HashMap;

use log::{debug, info};
use serde::Serialize;

use super::error::RoundError;
use super::models::{ordered_pair, Match, MatchId, PlayerId};
use super::scoring;
use super::store::LeagueStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreChange {
    pub player_id: PlayerId,
    pub gained: i64,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub confirmed_matches: Vec<MatchId>,
    pub score_changes: Vec<ScoreChange>,
}

/// Result of one confirmation pass. `Incomplete` is a normal outcome, not
/// a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RoundOutcome {
    Confirmed(RoundSummary),
    #[serde(rename_all = "camelCase")]
    Incomplete { missing_pairs: Vec<(PlayerId, PlayerId)> },
}

impl RoundOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, RoundOutcome::Confirmed(_))
    }
}

/// Confirms one pending match for every pair of players, or nothing.
///
/// All score deltas are accumulated in memory first. The store sees a
/// single `save_all` call, and only when every pair among the current
/// roster has a pending result. When several results are pending for the
/// same pair the earliest reported one is used; the rest stay queued for
/// later rounds.
pub fn confirm_round<S: LeagueStore + ?Sized>(store: &mut S) -> Result<RoundOutcome, RoundError> {
    let mut players = store.list_players()?;
    players.sort_by_key(|p| p.id);
    let pending = store.list_unconfirmed_matches()?;

    for game in &pending {
        scoring::check_integrity(game)?;
    }

    let oldest = oldest_pending_by_pair(&pending);
    let mut selected: Vec<Match> = Vec::new();
    let mut missing_pairs = Vec::new();
    let mut gains: HashMap<PlayerId, i64> = HashMap::new();

    for (idx, first) in players.iter().enumerate() {
        for second in &players[idx + 1..] {
            let Some(game) = oldest.get(&ordered_pair(first.id, second.id)) else {
                missing_pairs.push((first.id, second.id));
                continue;
            };

            let outcome = scoring::score_match(game)?;
            *gains.entry(outcome.winner_id).or_default() += outcome.winner_gain;
            *gains.entry(outcome.loser_id).or_default() += outcome.loser_gain;
            selected.push((*game).clone());
        }
    }

    if players.len() < 2 || !missing_pairs.is_empty() {
        debug!(
            "Round incomplete: {} of {} pairs still waiting for a result",
            missing_pairs.len(),
            pair_count(players.len())
        );
        return Ok(RoundOutcome::Incomplete { missing_pairs });
    }

    let mut score_changes = Vec::with_capacity(players.len());
    for player in &mut players {
        let gained = gains.get(&player.id).copied().unwrap_or(0);
        player.score += gained;
        score_changes.push(ScoreChange {
            player_id: player.id,
            gained,
            score: player.score,
        });
    }

    for game in &mut selected {
        game.confirmed = true;
    }

    store.save_all(&players, &selected)?;

    info!(
        "Round confirmed: {} matches across {} players",
        selected.len(),
        players.len()
    );

    Ok(RoundOutcome::Confirmed(RoundSummary {
        confirmed_matches: selected.iter().map(|m| m.id).collect(),
        score_changes,
    }))
}

fn oldest_pending_by_pair(pending: &[Match]) -> HashMap<(PlayerId, PlayerId), &Match> {
    let mut oldest: HashMap<(PlayerId, PlayerId), &Match> = HashMap::new();

    for game in pending {
        oldest
            .entry(game.pair())
            .and_modify(|current| {
                if (game.created_at, game.id) < (current.created_at, current.id) {
                    *current = game;
                }
            })
            .or_insert(game);
    }

    oldest
}

fn pair_count(players: usize) -> usize {
    players * players.saturating_sub(1) / 2
}

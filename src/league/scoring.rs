use super::error::IntegrityViolation;
use super::models::{Match, PlayerId};

pub const WINNER_MULTIPLIER: i64 = 2;
pub const LOSER_MULTIPLIER: i64 = 1;

/// Score change produced by confirming one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOutcome {
    pub winner_id: PlayerId,
    pub winner_gain: i64,
    pub loser_id: PlayerId,
    pub loser_gain: i64,
}

/// Rejects rows that would force the engine to guess a winner.
pub fn check_integrity(game: &Match) -> Result<(), IntegrityViolation> {
    if game.player_one_id == game.player_two_id {
        return Err(IntegrityViolation::SelfMatch {
            match_id: game.id,
            player_id: game.player_one_id,
        });
    }
    if game.player_one_score < 0 || game.player_two_score < 0 {
        return Err(IntegrityViolation::NegativeScore { match_id: game.id });
    }
    if game.player_one_score == game.player_two_score {
        return Err(IntegrityViolation::EqualScores {
            match_id: game.id,
            score: game.player_one_score,
        });
    }
    Ok(())
}

pub fn score_match(game: &Match) -> Result<PairOutcome, IntegrityViolation> {
    check_integrity(game)?;

    let (winner_id, winner_score, loser_id, loser_score) =
        if game.player_one_score > game.player_two_score {
            (game.player_one_id, game.player_one_score, game.player_two_id, game.player_two_score)
        } else {
            (game.player_two_id, game.player_two_score, game.player_one_id, game.player_one_score)
        };

    Ok(PairOutcome {
        winner_id,
        winner_gain: i64::from(winner_score) * WINNER_MULTIPLIER,
        loser_id,
        loser_gain: i64::from(loser_score) * LOSER_MULTIPLIER,
    })
}

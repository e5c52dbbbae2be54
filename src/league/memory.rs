use std::collections::BTreeMap;

use anyhow::{bail, Result};

use super::models::{Match, NewMatch, Player, PlayerId};
use super::store::LeagueStore;

/// In-process store used to exercise the engine without SQLite.
///
/// `save_all` stages every row before touching state, so a failed call
/// leaves the store as it was.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    players: BTreeMap<PlayerId, Player>,
    matches: Vec<Match>,
    fail_saves: bool,
    save_calls: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `save_all` fail.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of `save_all` calls that reached the store, failed or not.
    pub fn save_calls(&self) -> usize {
        self.save_calls
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn players(&self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Pushes a row as-is, bypassing intake validation.
    pub fn push_raw_match(&mut self, game: Match) {
        self.matches.push(game);
    }

    fn next_player_id(&self) -> PlayerId {
        self.players.keys().next_back().map_or(1, |id| id + 1)
    }

    fn next_match_id(&self) -> i32 {
        self.matches.iter().map(|m| m.id).max().map_or(1, |id| id + 1)
    }
}

impl LeagueStore for MemoryStore {
    fn list_players(&mut self) -> Result<Vec<Player>> {
        Ok(self.players())
    }

    fn list_unconfirmed_matches(&mut self) -> Result<Vec<Match>> {
        Ok(self.matches.iter().filter(|m| !m.confirmed).cloned().collect())
    }

    fn save_all(&mut self, players: &[Player], matches: &[Match]) -> Result<()> {
        self.save_calls += 1;
        if self.fail_saves {
            bail!("simulated write failure");
        }

        let mut staged_players = self.players.clone();
        for player in players {
            match staged_players.get_mut(&player.id) {
                Some(slot) => *slot = player.clone(),
                None => bail!("player {} does not exist", player.id),
            }
        }

        let mut staged_matches = self.matches.clone();
        for game in matches {
            match staged_matches.iter_mut().find(|m| m.id == game.id) {
                Some(slot) if slot.confirmed => bail!("match {} is already confirmed", game.id),
                Some(slot) => *slot = game.clone(),
                None => bail!("match {} does not exist", game.id),
            }
        }

        self.players = staged_players;
        self.matches = staged_matches;
        Ok(())
    }

    fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>> {
        Ok(self.players.get(&id).cloned())
    }

    fn insert_player(&mut self, name: &str) -> Result<Player> {
        let player = Player {
            id: self.next_player_id(),
            name: name.to_string(),
            score: 0,
            created_at: None,
        };
        self.players.insert(player.id, player.clone());
        Ok(player)
    }

    fn insert_match(&mut self, new_match: &NewMatch) -> Result<Match> {
        let game = Match {
            id: self.next_match_id(),
            created_at: new_match.created_at,
            player_one_id: new_match.player_one_id,
            player_two_id: new_match.player_two_id,
            player_one_score: new_match.player_one_score,
            player_two_score: new_match.player_two_score,
            confirmed: false,
        };
        self.matches.push(game.clone());
        Ok(game)
    }

    fn count_matches(&mut self) -> Result<i64> {
        Ok(self.matches.len() as i64)
    }
}

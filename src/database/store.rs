use anyhow::{Context, Result};
use rusqlite::Connection;

use super::{matches, players};
use crate::league::{LeagueStore, Match, NewMatch, Player, PlayerId};

/// `LeagueStore` over a connection that is already inside a transaction.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn write_rows(&self, updated: &[Player], confirmed: &[Match]) -> Result<()> {
        for player in updated {
            players::update_score(self.conn, player.id, player.score)?;
        }
        for game in confirmed.iter().filter(|m| m.confirmed) {
            matches::mark_confirmed(self.conn, game.id)?;
        }
        Ok(())
    }
}

impl LeagueStore for SqliteStore<'_> {
    fn list_players(&mut self) -> Result<Vec<Player>> {
        players::list_all(self.conn)
    }

    fn list_unconfirmed_matches(&mut self) -> Result<Vec<Match>> {
        matches::list_unconfirmed(self.conn)
    }

    fn save_all(&mut self, players: &[Player], matches: &[Match]) -> Result<()> {
        self.conn
            .execute_batch("SAVEPOINT save_all")
            .context("Failed to open savepoint")?;

        match self.write_rows(players, matches) {
            Ok(()) => self
                .conn
                .execute_batch("RELEASE save_all")
                .context("Failed to release savepoint"),
            Err(err) => {
                if let Err(rollback_err) = self.conn.execute_batch("ROLLBACK TO save_all; RELEASE save_all") {
                    log::error!("Failed to roll back savepoint: {rollback_err}");
                }
                Err(err)
            }
        }
    }

    fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>> {
        players::find_by_id(self.conn, id)
    }

    fn insert_player(&mut self, name: &str) -> Result<Player> {
        players::insert_player(self.conn, name)
    }

    fn insert_match(&mut self, new_match: &NewMatch) -> Result<Match> {
        matches::insert_match(self.conn, new_match)
    }

    fn count_matches(&mut self) -> Result<i64> {
        matches::count_all(self.conn)
    }
}

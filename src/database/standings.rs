use anyhow::Result;
use rusqlite::Connection;

use super::{matches, players};
use crate::league::Standings;

/// Read-only snapshot of the table. Runs outside any write transaction.
pub fn load_standings(conn: &Connection) -> Result<Standings> {
    Ok(Standings {
        players: players::list_by_score(conn)?,
        confirmed_matches: matches::list_views(conn, true)?,
        pending_matches: matches::list_views(conn, false)?,
    })
}

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::league::{Match, MatchId, MatchView, NewMatch};

const MATCH_COLUMNS: &str =
    "id, created_at, player_one_id, player_two_id, player_one_score, player_two_score, confirmed";

pub fn insert_match(conn: &Connection, new_match: &NewMatch) -> Result<Match> {
    let sql = format!(
        "INSERT INTO matches (created_at, player_one_id, player_two_id, player_one_score, player_two_score) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {MATCH_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            new_match.created_at,
            new_match.player_one_id,
            new_match.player_two_id,
            new_match.player_one_score,
            new_match.player_two_score
        ],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        created_at: row.get(1)?,
        player_one_id: row.get(2)?,
        player_two_id: row.get(3)?,
        player_one_score: row.get(4)?,
        player_two_score: row.get(5)?,
        confirmed: row.get(6)?,
    })
}

/// Pending matches, oldest report first.
pub fn list_unconfirmed(conn: &Connection) -> Result<Vec<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE confirmed = 0 ORDER BY created_at, id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list unconfirmed matches")?;

    Ok(rows)
}

pub fn count_all(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))
        .context("Failed to count matches")
}

/// Flips a pending match to confirmed. Already confirmed rows are never
/// touched, and hitting one is an error.
pub fn mark_confirmed(conn: &Connection, id: MatchId) -> Result<()> {
    let updated = conn
        .execute("UPDATE matches SET confirmed = 1 WHERE id = ?1 AND confirmed = 0", params![id])
        .with_context(|| format!("Failed to confirm match {id}"))?;

    if updated == 0 {
        anyhow::bail!("Match {id} is missing or already confirmed");
    }
    Ok(())
}

/// Matches with both player names, newest first.
pub fn list_views(conn: &Connection, confirmed: bool) -> Result<Vec<MatchView>> {
    let sql = "
        SELECT
            m.id,
            m.created_at,
            m.player_one_id,
            p1.name,
            m.player_one_score,
            m.player_two_id,
            p2.name,
            m.player_two_score,
            m.confirmed
        FROM matches m
        JOIN players p1 ON m.player_one_id = p1.id
        JOIN players p2 ON m.player_two_id = p2.id
        WHERE m.confirmed = ?1
        ORDER BY m.created_at DESC, m.id DESC
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![confirmed], |row| {
            Ok(MatchView {
                id: row.get(0)?,
                created_at: row.get(1)?,
                player_one_id: row.get(2)?,
                player_one_name: row.get(3)?,
                player_one_score: row.get(4)?,
                player_two_id: row.get(5)?,
                player_two_name: row.get(6)?,
                player_two_score: row.get(7)?,
                confirmed: row.get(8)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches")?;

    Ok(rows)
}

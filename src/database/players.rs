use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::league::{Player, PlayerId};

const PLAYER_COLUMNS: &str = "id, name, score, created_at";

pub fn insert_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = format!("INSERT INTO players (name) VALUES (?1) RETURNING {PLAYER_COLUMNS}");

    conn.query_row(&sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        score: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id");
    query_players(conn, &sql)
}

/// Highest score first; equal scores keep registration order.
pub fn list_by_score(conn: &Connection) -> Result<Vec<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY score DESC, id");
    query_players(conn, &sql)
}

fn query_players(conn: &Connection, sql: &str) -> Result<Vec<Player>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

pub fn update_score(conn: &Connection, id: PlayerId, score: i64) -> Result<()> {
    let updated = conn
        .execute("UPDATE players SET score = ?1 WHERE id = ?2", params![score, id])
        .with_context(|| format!("Failed to update score of player {id}"))?;

    if updated == 0 {
        anyhow::bail!("Player {id} does not exist");
    }
    Ok(())
}

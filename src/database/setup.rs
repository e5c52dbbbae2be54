use anyhow::{Context, Result};
use rusqlite::Connection;

const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Creates missing tables and indexes. Existing data is kept.
pub fn init_database(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::info!("Database schema ready");
    Ok(())
}

/// Drops every league table and recreates the schema.
pub fn reset_database(conn: &Connection) -> Result<()> {
    conn.execute_batch(DROP_SQL)
        .context("Failed to drop league tables")?;
    init_database(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_skips_empty_statements() {
        let statements = split_sql_statements("CREATE TABLE a (x);\n\n;CREATE TABLE b (y);  ");
        assert_eq!(statements, vec!["CREATE TABLE a (x)", "CREATE TABLE b (y)"]);
    }

    #[test]
    fn test_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        init_database(&conn).unwrap();
        conn.execute("INSERT INTO players (name) VALUES ('Anna')", []).unwrap();
        init_database(&conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_reset_clears_data() {
        let conn = Connection::open_in_memory().unwrap();
        init_database(&conn).unwrap();
        conn.execute("INSERT INTO players (name) VALUES ('Anna')", []).unwrap();

        reset_database(&conn).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 0);
    }
}

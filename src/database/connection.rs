use std::time::Duration;

use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::settings::DatabaseSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &DatabaseSettings) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(&settings.path), settings.busy_timeout_ms);
    build_pool(manager, settings.pool_size)
}

/// Single-connection pool over a private in-memory database.
///
/// Every pooled connection to `:memory:` would see its own empty database,
/// so the pool is capped at one connection that is never recycled.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory(), 0);
    r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .context("Failed to create in-memory connection pool")
}

fn build_manager(manager: SqliteConnectionManager, busy_timeout_ms: u64) -> SqliteConnectionManager {
    manager.with_init(move |conn| {
        conn.busy_timeout(Duration::from_millis(busy_timeout_ms))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    })
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}

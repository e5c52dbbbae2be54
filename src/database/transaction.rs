use anyhow::Context;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Runs `f` inside a write transaction: commit on `Ok`, roll back on `Err`.
///
/// `BEGIN IMMEDIATE` takes SQLite's reserved lock up front, so at most one
/// write transaction exists at a time. A second writer waits for the busy
/// timeout instead of interleaving with the first.
pub fn with_write_txn<T, E, F>(conn: &mut Connection, f: F) -> Result<T, E>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    E: From<anyhow::Error>,
{
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin write transaction")?;

    match f(&tx) {
        Ok(value) => {
            tx.commit().context("Failed to commit transaction")?;
            Ok(value)
        }
        Err(err) => {
            // Keep the original error; a failed rollback is only logged.
            if let Err(rollback_err) = tx.rollback() {
                log::error!("Failed to roll back transaction: {rollback_err}");
            }
            Err(err)
        }
    }
}

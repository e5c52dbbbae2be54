pub mod connection;
pub mod matches;
pub mod players;
pub mod setup;
pub mod standings;
pub mod store;
pub mod transaction;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use store::SqliteStore;
pub use transaction::with_write_txn;

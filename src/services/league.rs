use anyhow::Result;
use chrono::Utc;

use crate::database::{self, DbPool, SqliteStore};
use crate::league::{
    self, IntakeError, IntakeOutcome, MatchReport, Player, RegistrationError, RoundError, RoundOutcome,
    Standings,
};

/// Write paths run in their own immediate transaction, so a registration,
/// an intake plus the pass it triggers, or a manual pass never interleave.
#[derive(Clone)]
pub struct LeagueService {
    pool: DbPool,
}

impl LeagueService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the pool and makes sure the schema exists.
    pub fn open(pool: DbPool) -> Result<Self> {
        let conn = database::get_connection(&pool)?;
        database::setup::init_database(&conn)?;
        drop(conn);
        Ok(Self::new(pool))
    }

    pub fn register_player(&self, name: &str) -> Result<Player, RegistrationError> {
        let mut conn = database::get_connection(&self.pool)?;
        database::with_write_txn(&mut conn, |tx| {
            league::register_player(&mut SqliteStore::new(tx), name)
        })
    }

    /// Records the report and runs the confirmation pass in the same
    /// transaction. Any error rolls back both.
    pub fn report_match(&self, report: &MatchReport) -> Result<IntakeOutcome, IntakeError> {
        let mut conn = database::get_connection(&self.pool)?;
        database::with_write_txn(&mut conn, |tx| {
            league::record_match(&mut SqliteStore::new(tx), report, Utc::now().naive_utc())
        })
    }

    /// Re-runs the confirmation pass without a new report.
    pub fn confirm_pending(&self) -> Result<RoundOutcome, RoundError> {
        let mut conn = database::get_connection(&self.pool)?;
        database::with_write_txn(&mut conn, |tx| league::confirm_round(&mut SqliteStore::new(tx)))
    }

    pub fn standings(&self) -> Result<Standings> {
        let conn = database::get_connection(&self.pool)?;
        database::standings::load_standings(&conn)
    }
}

use anyhow::Result;

use super::models::{Match, NewMatch, Player, PlayerId};

/// Entity store as seen from inside one transaction.
///
/// Implementations never commit or roll back on their own; whoever opened
/// the transaction decides that from the result of the operation.
pub trait LeagueStore {
    /// All players, ordered by id.
    fn list_players(&mut self) -> Result<Vec<Player>>;

    fn list_unconfirmed_matches(&mut self) -> Result<Vec<Match>>;

    /// Writes every given row or none of them.
    fn save_all(&mut self, players: &[Player], matches: &[Match]) -> Result<()>;

    fn find_player(&mut self, id: PlayerId) -> Result<Option<Player>>;

    fn insert_player(&mut self, name: &str) -> Result<Player>;

    fn insert_match(&mut self, new_match: &NewMatch) -> Result<Match>;

    /// Confirmed and pending matches together.
    fn count_matches(&mut self) -> Result<i64>;
}

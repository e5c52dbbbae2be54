use log::info;

use super::error::RegistrationError;
use super::models::Player;
use super::store::LeagueStore;

pub fn is_league_started<S: LeagueStore + ?Sized>(store: &mut S) -> anyhow::Result<bool> {
    Ok(store.count_matches()? != 0)
}

/// Adds a player with a zero score. Only allowed before the first match is
/// reported.
pub fn register_player<S: LeagueStore + ?Sized>(store: &mut S, name: &str) -> Result<Player, RegistrationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RegistrationError::EmptyName);
    }
    if is_league_started(store)? {
        return Err(RegistrationError::LeagueStarted);
    }

    let player = store.insert_player(name)?;
    info!("Registered player {} ({})", player.id, player.name);
    Ok(player)
}

pub mod api;
pub mod cli;
pub mod config;
pub mod console;
pub mod database;
pub mod league;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::league::MatchReport;
use crate::services::league::LeagueService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: Option<u16>) -> Result<()> {
    let config = AppConfig::new();
    let port = port.unwrap_or(config.server.port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database)?;
    let conn = database::get_connection(&pool)?;
    database::setup::init_database(&conn)
}

pub fn handle_reset() -> Result<()> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database)?;
    let conn = database::get_connection(&pool)?;
    database::setup::reset_database(&conn)
}

pub fn handle_add_player(name: &str) -> Result<()> {
    let league = open_league()?;
    let player = league.register_player(name)?;
    println!("Player added: #{} {}", player.id, player.name);
    Ok(())
}

pub fn handle_report(first_player: &str, second_player: &str, first_score: &str, second_score: &str) -> Result<()> {
    let report = MatchReport::parse(first_player, second_player, first_score, second_score)?;
    let league = open_league()?;
    let outcome = league.report_match(&report)?;
    println!("Match added: #{}", outcome.recorded.id);
    console::print_round(&outcome.round);
    Ok(())
}

pub fn handle_confirm() -> Result<()> {
    let league = open_league()?;
    let round = league.confirm_pending()?;
    console::print_round(&round);
    Ok(())
}

pub fn handle_standings() -> Result<()> {
    let league = open_league()?;
    console::print_standings(&league.standings()?);
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_league() -> Result<LeagueService> {
    let config = AppConfig::new();
    let pool = database::create_pool(&config.database)?;
    LeagueService::open(pool)
}
